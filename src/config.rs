//! Tuning knobs for the page: section table, scroll geometry and timings.

/// Section ids in document order, with the label shown in both nav link sets.
pub const SECTIONS: [(&str, &str); 5] = [
    ("inicio", "Inicio"),
    ("servicios", "Servicios"),
    ("nosotros", "Nosotros"),
    ("equipo", "Equipo"),
    ("contacto", "Contacto"),
];

/// Probe point below the navbar that decides which section is current.
pub const SECTION_PROBE_OFFSET: f64 = 100.0;

/// Extra gap left above a section when smooth-scrolling to it.
pub const SCROLL_MARGIN: f64 = 20.0;

/// Scroll offset past which the navbar switches to its solid background.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// A section reveals once its top clears viewport height minus this margin.
pub const SECTION_REVEAL_MARGIN: f64 = 150.0;

/// Quiescence window for the debounced reveal pipeline.
pub const REVEAL_DEBOUNCE_MS: u32 = 10;

pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFICATION_AUTO_HIDE_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Simulated round trip for the contact form delivery.
pub const INQUIRY_ROUND_TRIP_MS: u32 = 2_000;

pub const TESTIMONIAL_ROTATE_MS: u32 = 5_000;

pub const HERO_PARALLAX_SPEED: f64 = 0.1;
pub const FLOATING_CARD_PARALLAX_BASE: f64 = 0.05;
pub const FLOATING_CARD_PARALLAX_STEP: f64 = 0.02;

/// Per-sibling delay for the staggered card fade-in.
pub const CARD_STAGGER_STEP_SECS: f64 = 0.1;

/// Imagery worth warming the cache for before the user scrolls to it.
pub const CRITICAL_IMAGES: [&str; 2] = [
    "https://images.pexels.com/photos/3760067/pexels-photo-3760067.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=800",
];
