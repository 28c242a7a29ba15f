//! Unit Conversion Contract
//!
//! Every measurement kind stores its value in one canonical unit. A [`Unit`]
//! converts between that canonical value and the value a person reads on a
//! display, and knows how to format the display value.
//!
//! All station units are linear:
//!
//! ```text
//! display   = canonical * scale + offset
//! canonical = (display - offset) / scale
//! ```
//!
//! Temperature is the only family that needs an offset. The canonical unit of
//! each family has `scale = 1, offset = 0`, so converting to and from it is the
//! identity.
//!
//! Units never validate ranges; the owning measurement kind does.

use alloc::format;
use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use crate::measurement::AnyUnit;

/// Linear transform from a canonical value to a display value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Display units per canonical unit
    pub scale: f64,
    /// Display value of canonical zero
    pub offset: f64,
}

impl Conversion {
    /// The canonical unit's own conversion
    pub const IDENTITY: Self = Self { scale: 1.0, offset: 0.0 };

    /// Pure scale factor, no offset
    pub const fn scaled(scale: f64) -> Self {
        Self { scale, offset: 0.0 }
    }

    /// Scale and offset
    pub const fn affine(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Display value to canonical value
    #[inline]
    pub fn to_canonical(&self, display: f64) -> f64 {
        (display - self.offset) / self.scale
    }

    /// Canonical value to display value
    #[inline]
    pub fn from_canonical(&self, canonical: f64) -> f64 {
        canonical * self.scale + self.offset
    }
}

/// Trait implemented by every unit enum
///
/// Implementors are small `Copy` enums; one variant per unit of the family.
pub trait Unit: Copy + Debug + PartialEq + Eq + Hash + 'static {
    /// Conversion from the family's canonical unit to this unit
    fn conversion(self) -> Conversion;

    /// Short display label, e.g. `"°C"` or `"mb"`
    fn label(self) -> &'static str;

    /// Decimal digits shown when formatting
    fn decimals(self) -> usize;

    /// Every unit of the family
    fn all() -> &'static [Self];

    /// Wrap into the kind-erased [`AnyUnit`]
    fn into_any(self) -> AnyUnit;

    /// Unwrap from [`AnyUnit`], `None` for another family
    fn from_any(unit: AnyUnit) -> Option<Self>;

    /// Convert a display value in this unit to the canonical unit
    #[inline]
    fn to_canonical(self, value: f64) -> f64 {
        self.conversion().to_canonical(value)
    }

    /// Convert a canonical value to this unit
    #[inline]
    fn from_canonical(self, value: f64) -> f64 {
        self.conversion().from_canonical(value)
    }

    /// Format a value already expressed in this unit
    fn format(self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }

    /// Format a value already expressed in this unit, followed by its label
    fn format_with_unit(self, value: f64) -> String {
        let label = self.label();
        if label.is_empty() {
            self.format(value)
        } else {
            format!("{} {}", self.format(value), label)
        }
    }

    /// Look a unit up by its display label
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|unit| unit.label() == label)
    }
}
