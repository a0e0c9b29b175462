/// One intersection record for an observed page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl SectionEntry {
    pub fn new(id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self { id: id.into(), is_intersecting, ratio }
    }

    fn visible_ratio(&self) -> f64 {
        if self.ratio.is_nan() {
            0.0
        } else {
            self.ratio
        }
    }
}

/// The intersecting entry with the highest ratio. Ties go to whichever entry
/// was delivered first.
pub fn most_visible(entries: &[SectionEntry]) -> Option<&SectionEntry> {
    entries
        .iter()
        .filter(|e| e.is_intersecting)
        .fold(None, |best: Option<&SectionEntry>, e| match best {
            Some(b) if b.visible_ratio() >= e.visible_ratio() => Some(b),
            _ => Some(e),
        })
}

/// Which nav section is currently highlighted.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSection {
    current: String,
    released: bool,
}

impl ActiveSection {
    pub fn new(initial: impl Into<String>) -> Self {
        Self { current: initial.into(), released: false }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Applies one observer batch. Returns true if the active id changed.
    /// Batches with nothing intersecting leave the previous id in place.
    pub fn apply(&mut self, entries: &[SectionEntry]) -> bool {
        if self.released {
            return false;
        }
        match most_visible(entries) {
            Some(top) if !top.id.is_empty() && top.id != self.current => {
                self.current = top.id.clone();
                true
            }
            _ => false,
        }
    }

    pub fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_intersecting_section_wins() {
        let entries = vec![
            SectionEntry::new("a", false, 0.0),
            SectionEntry::new("b", true, 0.4),
            SectionEntry::new("c", false, 0.0),
        ];
        let mut active = ActiveSection::new("a");
        assert!(active.apply(&entries));
        assert_eq!(active.current(), "b");
    }

    #[test]
    fn highest_ratio_wins() {
        let entries = vec![
            SectionEntry::new("services", true, 0.1),
            SectionEntry::new("projects", true, 0.35),
            SectionEntry::new("reviews", true, 0.2),
        ];
        assert_eq!(most_visible(&entries).map(|e| e.id.as_str()), Some("projects"));
    }

    #[test]
    fn ties_fall_to_first_delivered() {
        let entries = vec![
            SectionEntry::new("faq", true, 0.2),
            SectionEntry::new("contact", true, 0.2),
        ];
        assert_eq!(most_visible(&entries).map(|e| e.id.as_str()), Some("faq"));
    }

    #[test]
    fn nothing_intersecting_keeps_previous() {
        let mut active = ActiveSection::new("services");
        active.apply(&[SectionEntry::new("reviews", true, 0.2)]);
        let changed = active.apply(&[
            SectionEntry::new("reviews", false, 0.0),
            SectionEntry::new("faq", false, 0.0),
        ]);
        assert!(!changed);
        assert_eq!(active.current(), "reviews");
    }

    #[test]
    fn same_section_again_is_not_a_change() {
        let mut active = ActiveSection::new("services");
        assert!(!active.apply(&[SectionEntry::new("services", true, 0.35)]));
    }

    #[test]
    fn nan_ratio_counts_as_zero() {
        let entries = vec![
            SectionEntry::new("a", true, f64::NAN),
            SectionEntry::new("b", true, 0.1),
        ];
        assert_eq!(most_visible(&entries).map(|e| e.id.as_str()), Some("b"));
    }

    #[test]
    fn top_entry_without_id_is_ignored() {
        let mut active = ActiveSection::new("services");
        assert!(!active.apply(&[SectionEntry::new("", true, 0.9)]));
        assert_eq!(active.current(), "services");
    }

    #[test]
    fn released_tracker_stops_changing() {
        let mut active = ActiveSection::new("services");
        active.release();
        assert!(!active.apply(&[SectionEntry::new("contact", true, 0.35)]));
        assert_eq!(active.current(), "services");
    }
}
