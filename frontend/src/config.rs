use log::Level;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub tag: &'static str,
    pub img: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub area: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue {
    Count { to: f64, decimals: usize, suffix: &'static str },
    Text(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: StatValue,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub sms_href: &'static str,
    pub email: &'static str,
    /// Latitude, longitude of the map pin.
    pub map_pin: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Site {
    pub name: &'static str,
    pub initials: &'static str,
    pub region: &'static str,
    pub contact: Contact,
    pub nav: &'static [NavItem],
    pub services: &'static [Service],
    pub projects: &'static [Project],
    pub testimonials: &'static [Testimonial],
    pub faqs: &'static [Faq],
    pub stats: &'static [Stat],
    pub quote_services: &'static [&'static str],
}

pub const SITE: Site = Site {
    name: "Outlined Carpentry",
    initials: "OC",
    region: "Sydney & Surrounds",
    contact: Contact {
        phone_display: "0412 345 678",
        phone_href: "tel:+61412345678",
        sms_href: "sms:+61412345678",
        email: "quote@outlinedcarpentry.com.au",
        map_pin: (-34.058178, 150.695887),
    },
    nav: &[
        NavItem { label: "Services", href: "#services" },
        NavItem { label: "Projects", href: "#projects" },
        NavItem { label: "Reviews", href: "#reviews" },
        NavItem { label: "FAQ", href: "#faq" },
        NavItem { label: "Contact", href: "#contact" },
    ],
    services: &[
        Service { title: "Decking & Pergolas", desc: "Outdoor builds that look clean and last in Aussie weather." },
        Service { title: "Custom Wardrobes", desc: "Storage that actually fits your space (and your life)." },
        Service { title: "Cabinetry", desc: "Kitchen, laundry, and built-ins with tight lines and a solid finish." },
        Service { title: "Feature Walls & Shelving", desc: "Make the room pop without it looking try-hard." },
        Service { title: "Repairs & Renovations", desc: "Doors, frames, skirting, fixes. Done properly." },
        Service { title: "Small Commercial Fitouts", desc: "Reception, shelving, partitions. Fast turnaround." },
    ],
    projects: &[
        Project { title: "Merbau Deck, Campbelltown", tag: "Decking", img: "/projects/deck.jpg" },
        Project { title: "Pergola + Privacy Screens, Liverpool", tag: "Outdoor", img: "/projects/pergola.jpg" },
        Project { title: "Built-in Wardrobe, Oran Park", tag: "Wardrobes", img: "/projects/wardrobe.jpg" },
        Project { title: "Laundry Cabinetry Refresh, Camden", tag: "Cabinetry", img: "/projects/laundry.jpg" },
        Project { title: "Feature Wall + Floating Shelves, Leppington", tag: "Interiors", img: "/projects/featurewall.jpeg" },
        Project { title: "Outdoor Bench Seating, Narellan", tag: "Outdoor", img: "/projects/bench.jpg" },
    ],
    testimonials: &[
        Testimonial { name: "Alex M.", area: "Campbelltown", text: "Turned up on time, quote was clear, and the finish is spotless. Zero drama." },
        Testimonial { name: "Sarah L.", area: "Liverpool", text: "Pergola looks unreal. They cleaned up properly too, rare these days." },
        Testimonial { name: "Nathan R.", area: "Camden", text: "Built-in wardrobes came out perfect. Good communication the whole way." },
    ],
    faqs: &[
        Faq { question: "Do you do free quotes?", answer: "Yep. Send photos + your suburb and we’ll give a fast ballpark. If it needs a visit, we’ll book one." },
        Faq { question: "How soon can you start?", answer: "Usually 7–14 days depending on job size and materials. If it’s urgent, ask. Sometimes we can squeeze it in." },
        Faq { question: "Are you licensed and insured?", answer: "Yes. Licensed carpenter and insured for residential work." },
        Faq { question: "What areas do you service?", answer: "Sydney & surrounds (Campbelltown, Liverpool, Camden, Oran Park, Narellan + nearby)." },
        Faq { question: "How do payments work?", answer: "Small deposit to lock in materials/dates, then progress payments for bigger jobs. Clear and simple." },
    ],
    stats: &[
        Stat { value: StatValue::Count { to: 300.0, decimals: 0, suffix: "+" }, label: "Jobs completed" },
        Stat { value: StatValue::Count { to: 5.0, decimals: 1, suffix: "★" }, label: "Local rating" },
        Stat { value: StatValue::Text("7–14 days"), label: "Typical start" },
    ],
    quote_services: &["Decking", "Pergola", "Wardrobes", "Cabinetry", "Repairs", "Other"],
};

pub const QUOTE_SUBJECT: &str = "Quote request";

/// Whether the animated enhancement layer runs on top of the static page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageVariant {
    #[default]
    Enhanced,
    Plain,
}

impl PageVariant {
    pub fn is_enhanced(self) -> bool {
        self == PageVariant::Enhanced
    }

    /// Enhanced unless the visitor asked the browser for reduced motion.
    pub fn detect() -> Self {
        let reduced = web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        if reduced {
            PageVariant::Plain
        } else {
            PageVariant::Enhanced
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Element ids the nav links point at, in nav order.
pub fn section_ids(nav: &[NavItem]) -> Vec<String> {
    nav.iter()
        .filter_map(|item| item.href.strip_prefix('#'))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn mailto_href(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", email, urlencoding::encode(subject)),
        None => format!("mailto:{}", email),
    }
}

pub fn map_embed_url((lat, lng): (f64, f64)) -> String {
    format!("https://www.google.com/maps?q={},{}&z=16&output=embed", lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_follow_nav_order() {
        assert_eq!(section_ids(SITE.nav), vec!["services", "projects", "reviews", "faq", "contact"]);
    }

    #[test]
    fn section_ids_skip_external_links() {
        let nav = [
            NavItem { label: "Home", href: "/" },
            NavItem { label: "Top", href: "#" },
            NavItem { label: "FAQ", href: "#faq" },
        ];
        assert_eq!(section_ids(&nav), vec!["faq"]);
    }

    #[test]
    fn mailto_links() {
        assert_eq!(mailto_href(SITE.contact.email, None), "mailto:quote@outlinedcarpentry.com.au");
        assert_eq!(
            mailto_href("a@b.c", Some(QUOTE_SUBJECT)),
            "mailto:a@b.c?subject=Quote%20request"
        );
    }

    #[test]
    fn map_url_uses_pin() {
        assert_eq!(
            map_embed_url(SITE.contact.map_pin),
            "https://www.google.com/maps?q=-34.058178,150.695887&z=16&output=embed"
        );
    }

    #[test]
    fn gallery_has_six_projects() {
        assert_eq!(SITE.projects.len(), 6);
    }

    #[test]
    fn quote_form_defaults_to_first_service() {
        assert_eq!(SITE.quote_services.first(), Some(&"Decking"));
    }
}
