//! Server-rendered pages.
//!
//! Templates are compiled once at startup. Handlebars escapes every `{{ }}`
//! expansion, so event fields can be rendered as submitted.

use handlebars::Handlebars;
use serde::Serialize;

use crate::models::Event;
use crate::utils::error::AppError;

const HOME_TEMPLATE_NAME: &str = "home";

const HOME_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>DevEvent</title>
</head>
<body>
    <header>
        <nav>
            <a href="/" class="logo">
                <img src="/icons/logo.png" alt="logo" width="24" height="24">
                <p>DevEvent</p>
            </a>
            <ul>
                {{#each nav}}
                <li><a href="{{href}}">{{label}}</a></li>
                {{/each}}
            </ul>
        </nav>
    </header>
    <main>
        <section>
            <h1 class="text-center">The Hub for Every Dev <br> Event You Can't Miss</h1>
            <p class="text-center mt-5">Hackathons, Meetups, and Conferences, All in One Place</p>

            <a href="#events" id="explore-btn" class="mt-7 mx-auto">Explore Events</a>

            <div id="events" class="mt-20 space-y-7">
                <h3>Featured Events</h3>
                <ul class="events">
                    {{#each events}}
                    <li class="list-none">
                        <a href="/events/{{slug}}" id="event-card">
                            {{#if image}}<img src="{{image}}" alt="{{title}}" class="poster">{{/if}}
                            <div class="flex flex-row gap-2">
                                <img src="/icons/pin.svg" alt="location" width="14" height="14">
                                <p>{{location}}</p>
                            </div>
                            <p class="title">{{title}}</p>
                            <div class="datetime">
                                {{#if date}}<div><img src="/icons/calendar.svg" alt="date" width="14" height="14"><p>{{date}}</p></div>{{/if}}
                                {{#if time}}<div><img src="/icons/clock.svg" alt="time" width="14" height="14"><p>{{time}}</p></div>{{/if}}
                            </div>
                        </a>
                    </li>
                    {{/each}}
                </ul>
            </div>
        </section>
    </main>
</body>
</html>
"##;

#[derive(Serialize)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        href: "/",
        label: "Home",
    },
    NavLink {
        href: "/events",
        label: "Events",
    },
    NavLink {
        href: "/create",
        label: "Create Event",
    },
];

#[derive(Serialize)]
struct HomePage<'a> {
    nav: &'a [NavLink],
    events: &'a [Event],
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(HOME_TEMPLATE_NAME, HOME_TEMPLATE)
            .map_err(|e| AppError::Template(format!("failed to register home: {e}")))?;

        Ok(Self { handlebars })
    }

    pub fn render_home(&self, events: &[Event]) -> Result<String, AppError> {
        tracing::debug!(events = events.len(), "rendering home page");
        self.handlebars
            .render(
                HOME_TEMPLATE_NAME,
                &HomePage {
                    nav: &NAV_LINKS,
                    events,
                },
            )
            .map_err(|e| AppError::Template(e.to_string()))
    }
}
