//! Featured events shipped with the site, loaded by the `seed-events` binary.

use crate::models::event::NewEvent;

pub struct FeaturedEvent {
    pub image: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub time: &'static str,
}

pub const FEATURED_EVENTS: &[FeaturedEvent] = &[
    FeaturedEvent {
        image: "/images/event1.png",
        title: "JSConf EU 2026",
        slug: "jsconf-eu-2026",
        location: "Berlin, Germany",
        date: "May 23–24, 2026",
        time: "09:00 AM – 6:00 PM CEST",
    },
    FeaturedEvent {
        image: "/images/event2.png",
        title: "React Summit 2026",
        slug: "react-summit-2026",
        location: "Amsterdam, Netherlands",
        date: "June 10–12, 2026",
        time: "09:30 AM – 5:30 PM CEST",
    },
    FeaturedEvent {
        image: "/images/event3.png",
        title: "KubeCon + CloudNativeCon Europe 2026",
        slug: "kubecon-cloudnativecon-eu-2026",
        location: "Vienna, Austria",
        date: "March 25–27, 2026",
        time: "09:00 AM – 6:00 PM CET",
    },
    FeaturedEvent {
        image: "/images/event4.png",
        title: "Next.js Conf 2026",
        slug: "nextjs-conf-2026",
        location: "San Francisco, USA (hybrid)",
        date: "October 21, 2026",
        time: "10:00 AM – 4:00 PM PDT",
    },
    FeaturedEvent {
        image: "/images/event5.png",
        title: "Google I/O 2026",
        slug: "google-io-2026",
        location: "Mountain View, USA (Shoreline Amphitheatre)",
        date: "May 12–14, 2026",
        time: "09:00 AM – 5:00 PM PDT",
    },
    FeaturedEvent {
        image: "/images/event6.png",
        title: "AWS re:Invent 2026",
        slug: "aws-reinvent-2026",
        location: "Las Vegas, USA",
        date: "December 1–5, 2026",
        time: "09:00 AM – 6:00 PM PST",
    },
    FeaturedEvent {
        image: "/images/event-full.png",
        title: "Hack the North 2026",
        slug: "hack-the-north-2026",
        location: "Waterloo, Canada",
        date: "September 18–20, 2026",
        time: "48-hour hackathon",
    },
    FeaturedEvent {
        image: "/images/event3.png",
        title: "ETHGlobal New York 2026",
        slug: "ethglobal-new-york-2026",
        location: "New York City, USA",
        date: "August 7–9, 2026",
        time: "Hackathon weekend",
    },
];

impl FeaturedEvent {
    pub fn to_new_event(&self) -> NewEvent {
        NewEvent {
            title: self.title.to_string(),
            description: None,
            location: self.location.to_string(),
            date: Some(self.date.to_string()),
            time: Some(self.time.to_string()),
            image: Some(self.image.to_string()),
            slug: self.slug.to_string(),
            derived_slug: false,
        }
    }
}
