use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offering {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub badge: Option<&'static str>,
    pub category: &'static str,
    pub trending: Option<&'static str>,
    pub region: &'static str,
}

pub static CATALOG: &[Offering] = &[
    Offering {
        id: 1,
        title: "Mahamrityunjaya Jaap",
        description: "108 times powerful healing mantra for health & longevity",
        image: "/static/img/puja/mahamrityunjayapuja.svg",
        badge: Some("POPULAR"),
        category: "Health",
        trending: Some("Shivratri"),
        region: "North India",
    },
    Offering {
        id: 2,
        title: "Satyanarayan Pooja",
        description: "Monthly pooja for prosperity, happiness & family well-being",
        image: "/static/img/puja/satyanarayan.svg",
        badge: Some("POPULAR"),
        category: "Family",
        trending: Some("Monthly Puja"),
        region: "Pan India",
    },
    Offering {
        id: 3,
        title: "Rudrabhishek",
        description: "Lord Shiva abhishek with milk, honey & bilva patra",
        image: "/static/img/puja/rudrabhishek.svg",
        badge: Some("POPULAR"),
        category: "Peace",
        trending: Some("Shivratri"),
        region: "North India",
    },
    Offering {
        id: 4,
        title: "Baglamukhi Puja",
        description: "Victory over enemies & court cases",
        image: "/static/img/puja/baglamukhimaa.svg",
        badge: Some("POPULAR"),
        category: "Protection",
        trending: Some("Daily Rituals"),
        region: "North India",
    },
    Offering {
        id: 5,
        title: "Ganesh Atharvashirsha",
        description: "Remove obstacles & bring wisdom",
        image: "/static/img/puja/ganpatipuja.svg",
        badge: None,
        category: "Success",
        trending: Some("Daily Rituals"),
        region: "Pan India",
    },
    Offering {
        id: 6,
        title: "Lakshmi Puja",
        description: "Invoke goddess of wealth for prosperity and abundance",
        image: "/static/img/puja/lakshmipuja.svg",
        badge: Some("TRENDING"),
        category: "Wealth",
        trending: Some("Diwali"),
        region: "Pan India",
    },
    Offering {
        id: 7,
        title: "Durga Saptashati",
        description: "700 verses dedicated to Goddess Durga for protection",
        image: "/static/img/puja/durgapuja.svg",
        badge: Some("SPECIAL"),
        category: "Protection",
        trending: Some("Navratri Special"),
        region: "East India",
    },
    Offering {
        id: 8,
        title: "Kaal Sarp Dosh Puja",
        description: "Remedy for Kaal Sarp Yoga in horoscope",
        image: "/static/img/puja/kaalsarpdosh.svg",
        badge: None,
        category: "Peace",
        trending: Some("Monthly Puja"),
        region: "South India",
    },
    Offering {
        id: 9,
        title: "Navagraha Shanti",
        description: "Pacify all nine planets for harmony in life",
        image: "/static/img/puja/navgrahpuja.svg",
        badge: Some("POPULAR"),
        category: "Health",
        trending: Some("Monthly Puja"),
        region: "South India",
    },
];

pub fn find(id: u32) -> Option<&'static Offering> {
    CATALOG.iter().find(|o| o.id == id)
}

/// First `n` offerings in catalog order.
pub fn featured(n: usize) -> &'static [Offering] {
    &CATALOG[..n.min(CATALOG.len())]
}

pub static INCLUDED: [&str; 8] = [
    "Live streaming of complete puja",
    "Experienced and certified pandits",
    "Prasad delivery to your address",
    "Photo & video coverage",
    "Personalized sankalp with your name",
    "Post-puja consultation",
    "Certificate of completion",
    "Energized items delivery",
];

pub static PROCESS: [(&str, &str); 4] = [
    (
        "Booking Confirmation",
        "Complete your booking and receive confirmation with puja details",
    ),
    (
        "Sankalp",
        "Your name and gotra will be used for personalized sankalp",
    ),
    (
        "Puja Performance",
        "Watch the live streaming or receive recorded video",
    ),
    (
        "Prasad Delivery",
        "Receive blessed prasad and energized items at your doorstep",
    ),
];

pub static HIGHLIGHTS: [&str; 4] = [
    "100% Authentic Vedic Rituals",
    "Certified Pandits",
    "Live Streaming Available",
    "Prasad Delivery Pan-India",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Review {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Five-star rating row, filled stars first.
    pub fn stars(&self) -> String {
        (0..5)
            .map(|i| if i < self.rating { '★' } else { '☆' })
            .collect()
    }
}

pub static REVIEWS: &[Review] = &[
    Review {
        name: "Rajesh Kumar",
        rating: 5,
        text: "Excellent puja service. The pandits were very knowledgeable and the live streaming quality was great.",
    },
    Review {
        name: "Priya Sharma",
        rating: 5,
        text: "Very satisfied with the service. Prasad was delivered on time and the entire process was smooth.",
    },
    Review {
        name: "Amit Patel",
        rating: 4,
        text: "Good experience overall. The pandit explained each step during the puja.",
    },
];
