use crate::constants::MIN_SEGMENTS;
use crate::error::LayoutError;
use crate::i18n::{self, Language, MessageKey};
use crate::prize::PrizeId;
use crate::wheel_math;

/// One equal slice of the wheel. Carries no display text; labels are derived
/// per language so a language switch can never reorder or re-key the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub prize: Option<PrizeId>,
    pub color: &'static str,
}

impl Segment {
    pub fn display_label(&self, lang: Language) -> &'static str {
        match self.prize {
            Some(prize) => i18n::prize_name(lang, prize),
            None => i18n::translate(lang, MessageKey::ThankYou),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayout {
    segments: Vec<Segment>,
}

impl SegmentLayout {
    /// Builds a layout from `(prize, color)` pairs in clockwise order.
    /// Every prize must appear on exactly one segment.
    pub fn new<I>(entries: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (Option<PrizeId>, &'static str)>,
    {
        let segments: Vec<Segment> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (prize, color))| Segment { index, prize, color })
            .collect();

        if segments.len() < MIN_SEGMENTS {
            return Err(LayoutError::TooFewSegments {
                min: MIN_SEGMENTS,
                got: segments.len(),
            });
        }

        for prize in PrizeId::ALL {
            match segments.iter().filter(|s| s.prize == Some(prize)).count() {
                0 => return Err(LayoutError::MissingPrize(prize)),
                1 => {}
                _ => return Err(LayoutError::DuplicatePrize(prize)),
            }
        }

        Ok(Self { segments })
    }

    /// Seven slices with the three prizes up front.
    pub fn classic() -> Self {
        Self {
            segments: build(&[
                (Some(PrizeId::First), "#ff6b6b"),
                (Some(PrizeId::Second), "#f7b500"),
                (Some(PrizeId::Third), "#4cd964"),
                (None, "#5b8cff"),
                (None, "#9b59b6"),
                (None, "#2ecc71"),
                (None, "#e67e22"),
            ]),
        }
    }

    /// Eight slices with the prizes interleaved between "thank you" slices.
    pub fn octagon() -> Self {
        Self {
            segments: build(&[
                (None, "#5b8cff"),
                (Some(PrizeId::Second), "#f7b500"),
                (None, "#9b59b6"),
                (Some(PrizeId::First), "#ff6b6b"),
                (None, "#2ecc71"),
                (Some(PrizeId::Third), "#4cd964"),
                (None, "#e67e22"),
                (None, "#34495e"),
            ]),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segment_for(&self, prize: PrizeId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.prize == Some(prize))
    }

    /// Number of distinct slice colors.
    pub fn color_count(&self) -> usize {
        let mut colors: Vec<&str> = self.segments.iter().map(|s| s.color).collect();
        colors.sort_unstable();
        colors.dedup();
        colors.len()
    }

    pub fn slice_width(&self) -> f64 {
        wheel_math::slice_width(self.len())
    }

    pub fn labels(&self, lang: Language) -> Vec<&'static str> {
        self.segments.iter().map(|s| s.display_label(lang)).collect()
    }
}

fn build(entries: &[(Option<PrizeId>, &'static str)]) -> Vec<Segment> {
    entries
        .iter()
        .enumerate()
        .map(|(index, &(prize, color))| Segment { index, prize, color })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layouts_are_valid() {
        for layout in [SegmentLayout::classic(), SegmentLayout::octagon()] {
            let entries: Vec<_> = layout.segments().iter().map(|s| (s.prize, s.color)).collect();
            assert_eq!(SegmentLayout::new(entries).unwrap(), layout);
        }
        assert_eq!(SegmentLayout::classic().len(), 7);
        assert_eq!(SegmentLayout::octagon().len(), 8);
        assert_eq!(SegmentLayout::octagon().segment_for(PrizeId::First).map(|s| s.index), Some(3));
        assert_eq!(SegmentLayout::classic().color_count(), 7);
        assert_eq!(SegmentLayout::octagon().color_count(), 8);
    }

    #[test]
    fn test_rejects_duplicate_and_missing_prizes() {
        let dup = SegmentLayout::new([
            (Some(PrizeId::First), "#000"),
            (Some(PrizeId::First), "#111"),
            (Some(PrizeId::Second), "#222"),
            (Some(PrizeId::Third), "#333"),
        ]);
        assert_eq!(dup, Err(LayoutError::DuplicatePrize(PrizeId::First)));

        let missing = SegmentLayout::new([(Some(PrizeId::First), "#000"), (None, "#111"), (Some(PrizeId::Third), "#333")]);
        assert_eq!(missing, Err(LayoutError::MissingPrize(PrizeId::Second)));

        let tiny = SegmentLayout::new([(None, "#000")]);
        assert_eq!(tiny, Err(LayoutError::TooFewSegments { min: 3, got: 1 }));

        let two = SegmentLayout::new([(Some(PrizeId::First), "#000"), (Some(PrizeId::Second), "#111")]);
        assert_eq!(two, Err(LayoutError::TooFewSegments { min: 3, got: 2 }));

        let bare = SegmentLayout::new([
            (Some(PrizeId::Third), "#000"),
            (Some(PrizeId::First), "#111"),
            (Some(PrizeId::Second), "#222"),
        ]);
        assert_eq!(bare.map(|l| l.len()), Ok(3));
    }

    #[test]
    fn test_language_changes_labels_only() {
        let layout = SegmentLayout::octagon();
        let zh = layout.labels(Language::ZhCn);
        let en = layout.labels(Language::En);
        assert_ne!(zh, en);
        assert_eq!(en[3], "1st Prize");
        assert_eq!(en[0], "Thank You");
        assert_eq!(layout, SegmentLayout::octagon());
    }
}
