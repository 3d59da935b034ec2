use crate::error::Error;

/// One hbar in tinybars (the integer unit Hedera arithmetic is done in).
pub const TINYBAR_PER_HBAR: i64 = 100_000_000;

/// A signed amount of tinybars.
///
/// Saturating-vs-wrapping behavior is deliberately not built in: this
/// type picks checked arithmetic with an explicit [`Error::HbarOverflow`]
/// rather than silently wrapping. Unchecked `+`/`-`/`*` are intentionally
/// not implemented on this type — use [`Hbar::checked_add`] et al., or
/// treat overflow as the programming error it is and call `.unwrap()` at
/// the call site.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hbar(pub i64);

impl Hbar {
    pub fn from_tinybars(tinybars: i64) -> Self {
        Self(tinybars)
    }

    pub fn from_hbars(hbars: i64) -> Result<Self, Error> {
        hbars
            .checked_mul(TINYBAR_PER_HBAR)
            .map(Self)
            .ok_or(Error::HbarOverflow)
    }

    pub fn tinybars(&self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Hbar) -> Result<Hbar, Error> {
        self.0.checked_add(other.0).map(Hbar).ok_or(Error::HbarOverflow)
    }

    pub fn checked_sub(self, other: Hbar) -> Result<Hbar, Error> {
        self.0.checked_sub(other.0).map(Hbar).ok_or(Error::HbarOverflow)
    }

    pub fn checked_neg(self) -> Result<Hbar, Error> {
        self.0.checked_neg().map(Hbar).ok_or(Error::HbarOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hbar_to_tinybar_conversion() {
        assert_eq!(Hbar::from_hbars(1).unwrap().tinybars(), TINYBAR_PER_HBAR);
    }

    #[test]
    fn checked_add_overflow_is_an_error() {
        let max = Hbar::from_tinybars(i64::MAX);
        assert_eq!(max.checked_add(Hbar::from_tinybars(1)), Err(Error::HbarOverflow));
    }

    #[test]
    fn checked_add_within_range() {
        let a = Hbar::from_tinybars(100);
        let b = Hbar::from_tinybars(-30);
        assert_eq!(a.checked_add(b).unwrap(), Hbar::from_tinybars(70));
    }
}
