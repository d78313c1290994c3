use axum::response::IntoResponse;
use devdarshan_catalog::Offering;

use crate::template::{Layout, Template};

pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

static PUJA_SLIDES: [Slide; 3] = [
    Slide {
        image: "/static/img/puja/mangalnath.svg",
        title: "Mangal Bhat Puja",
        subtitle: "Mangalik Dosha",
    },
    Slide {
        image: "/static/img/puja/kaalsarpdosh.svg",
        title: "Kaalsarpdosh Puja",
        subtitle: "Kaalsarpdosh Dosha",
    },
    Slide {
        image: "/static/img/puja/rudrabhishek.svg",
        title: "Rudrabhishek Puja",
        subtitle: "Rudrabhishek Puja",
    },
];

static DARSHAN_SLIDES: [Slide; 3] = [
    Slide {
        image: "/static/img/darshan/mahakaleshwar.svg",
        title: "Mahakaleshwar Jyotirling",
        subtitle: "Bhasma Aarti • LIVE",
    },
    Slide {
        image: "/static/img/darshan/somnath.svg",
        title: "Somnath Jyotirling",
        subtitle: "Shiva Puja • LIVE",
    },
    Slide {
        image: "/static/img/darshan/dwarkadhish.svg",
        title: "Dwarkadhish Temple",
        subtitle: "Evening Aarti • LIVE",
    },
];

static STATS: [(&str, &str); 3] = [
    ("108+", "Live Temples"),
    ("15M+", "Devotees"),
    ("24×7", "Live Darshan"),
];

static FEATURES: [Feature; 6] = [
    Feature {
        icon: "shield",
        title: "Authentic Pujas",
        description: "Every ritual performed by certified Vedic priests following ancient scriptures",
        highlight: "100% Authentic",
    },
    Feature {
        icon: "map-pin",
        title: "108+ Sacred Temples",
        description: "Connected with temples across India including all 12 Jyotirlingas",
        highlight: "Pan India",
    },
    Feature {
        icon: "clock",
        title: "24/7 Live Darshan",
        description: "Watch live aarti and darshan anytime from the comfort of your home",
        highlight: "Always Live",
    },
    Feature {
        icon: "heart",
        title: "Prasad Delivery",
        description: "Sacred prasad delivered to your doorstep with love and devotion",
        highlight: "Free Delivery",
    },
    Feature {
        icon: "users",
        title: "15M+ Devotees",
        description: "Trusted by millions of devotees worldwide for their spiritual needs",
        highlight: "Community",
    },
    Feature {
        icon: "star",
        title: "Expert Guidance",
        description: "Get personalized spiritual guidance from experienced astrologers",
        highlight: "Expert Support",
    },
];

const FEATURED_COUNT: usize = 4;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub featured: &'static [Offering],
    pub puja_slides: &'static [Slide],
    pub darshan_slides: &'static [Slide],
    pub stats: &'static [(&'static str, &'static str)],
    pub features: &'static [Feature],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        layout: template.layout("/"),
        featured: devdarshan_catalog::featured(FEATURED_COUNT),
        puja_slides: &PUJA_SLIDES,
        darshan_slides: &DARSHAN_SLIDES,
        stats: &STATS,
        features: &FEATURES,
    })
}
