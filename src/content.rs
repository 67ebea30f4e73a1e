//! Static marketing copy for the store. No behavior lives here.

pub const STORE_NAME: &str = "ABC Book Center";
pub const STORE_NAME_HINDI: &str = "ए बी सी बुक सेंटर";
pub const STORE_ADDRESS: &str =
    "Bhootnath Road, Bahadurpur Housing Colony, Patna, Bihar 800026";

pub const PHONE: &str = "+91 99347 56863";
pub const PHONE_HREF: &str = "tel:+919934756863";
pub const WHATSAPP_HREF: &str = "https://wa.me/919934756863";
pub const MAPS_HREF: &str =
    "https://www.google.com/maps/search/?api=1&query=Bhootnath+Road+Patna+Bihar";
pub const MAPS_EMBED: &str =
    "https://maps.google.com/maps?q=Bhootnath+Road+Patna+Bihar&output=embed";
pub const GOOGLE_REVIEWS_HREF: &str =
    "https://www.google.com/maps/search/?api=1&query=ABC+Book+Center+Bhootnath+Road+Patna";

/// (label, section element id) pairs for the nav and footer quick links.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("Products", "products"),
    ("Reviews", "reviews"),
    ("About", "about"),
    ("Contact", "contact"),
    ("FAQ", "faq"),
];

pub struct TrustPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const TRUST_POINTS: &[TrustPoint] = &[
    TrustPoint {
        icon: "📚",
        title: "Wide Collection",
        desc: "School, college, and reference books across all subjects and boards.",
    },
    TrustPoint {
        icon: "📖",
        title: "Latest NCERT & Exam Guides",
        desc: "Up-to-date NCERT textbooks and top competitive exam preparation books.",
    },
    TrustPoint {
        icon: "💰",
        title: "Affordable Prices",
        desc: "Quality education materials at prices every student can afford.",
    },
    TrustPoint {
        icon: "📍",
        title: "Prime Location",
        desc: "Conveniently located on Bhootnath Road, easily accessible from all areas.",
    },
    TrustPoint {
        icon: "⭐",
        title: "Trusted by 350+ Customers",
        desc: "4-star rated by hundreds of satisfied students, parents, and teachers.",
    },
];

pub struct Category {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { icon: "📚", label: "School Books" },
    Category { icon: "📖", label: "NCERT Books" },
    Category { icon: "🎓", label: "Competitive Exam Books" },
    Category { icon: "✏️", label: "Stationery" },
    Category { icon: "🎨", label: "Art & Craft Supplies" },
    Category { icon: "📓", label: "College Books" },
];

pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub rating: u32,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "The collection is well organized and quality is good.",
        author: "Rahul K.",
        rating: 4,
    },
    Testimonial {
        text: "All books available at affordable price. Highly recommended!",
        author: "Priya S.",
        rating: 5,
    },
    Testimonial {
        text: "Best book store on Bhootnath Road. Found all my NCERT books here.",
        author: "Amit T.",
        rating: 4,
    },
    Testimonial {
        text: "Very helpful staff. Got all competitive exam books easily.",
        author: "Sneha R.",
        rating: 5,
    },
];

pub const FAQS: &[(&str, &str)] = &[
    (
        "Do you stock NCERT books for all classes?",
        "Yes, we have NCERT books for all classes from 1 to 12, covering all subjects \
         including Hindi, English, Maths, Science, Social Studies, and more.",
    ),
    (
        "Do you have competitive exam books?",
        "Yes, we stock books for UPSC, SSC, BPSC, Railway, Bank exams, and other \
         competitive exams from popular publishers.",
    ),
    (
        "What are your store timings?",
        "We are open Monday to Saturday, 9 AM to 7 PM. We're closed on Sundays and \
         national holidays.",
    ),
    (
        "Can I place an order on WhatsApp?",
        "Yes! WhatsApp us at +91 99347 56863 with your requirement and we'll confirm \
         availability and arrange pick-up or delivery.",
    ),
];
