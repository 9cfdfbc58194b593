//! Circular index over a fixed, non-empty list of records.

use std::num::NonZeroUsize;

use api::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: NonZeroUsize,
    index: usize,
}

impl Carousel {
    /// `None` for an empty list; there is nothing to cycle through.
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { len, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
    }

    /// Jump to `index`. Indices outside the list are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.len.get() {
            self.index = index;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn active<'a, T>(&self, records: &'a [T]) -> Option<&'a T> {
        records.get(self.index)
    }
}

/// Chevron glyphs for the previous/next buttons. Under right-to-left layout
/// the arrows swap so "previous" still points toward the reading start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowLayout {
    pub previous: &'static str,
    pub next: &'static str,
}

const CHEVRON_LEFT: &str = "‹";
const CHEVRON_RIGHT: &str = "›";

impl ArrowLayout {
    pub fn for_lang(lang: Lang) -> Self {
        if lang.is_rtl() {
            Self {
                previous: CHEVRON_RIGHT,
                next: CHEVRON_LEFT,
            }
        } else {
            Self {
                previous: CHEVRON_LEFT,
                next: CHEVRON_RIGHT,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut c = Carousel::new(3).unwrap();
        c.previous();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn full_cycles_return_to_start() {
        for n in 1..=7 {
            for start in 0..n {
                let mut c = Carousel::new(n).unwrap();
                c.jump(start);

                for _ in 0..n {
                    c.next();
                }
                assert_eq!(c.index(), start, "next x{n} from {start}");

                for _ in 0..n {
                    c.previous();
                }
                assert_eq!(c.index(), start, "previous x{n} from {start}");

                c.next();
                c.previous();
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn jump_sets_exact_index_and_ignores_out_of_range() {
        let mut c = Carousel::new(4).unwrap();
        c.jump(3);
        assert_eq!(c.index(), 3);
        assert!(c.is_active(3));
        c.jump(4);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn single_record_stays_put() {
        let mut c = Carousel::new(1).unwrap();
        c.next();
        c.previous();
        assert_eq!(c.index(), 0);
        assert_eq!(c.active(&["only"]), Some(&"only"));
    }

    #[test]
    fn arrows_mirror_under_rtl() {
        let ltr = ArrowLayout::for_lang(Lang::English);
        let rtl = ArrowLayout::for_lang(Lang::Arabic);
        assert_eq!(ltr.previous, rtl.next);
        assert_eq!(ltr.next, rtl.previous);
    }
}
