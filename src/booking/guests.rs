//! Guest counts for the booking and search forms.

use serde::{Deserialize, Serialize};

/// Adults can never be stepped below this
pub const MIN_ADULTS: u32 = 1;

/// Adults assumed when the caller gives no total
const DEFAULT_ADULTS: u32 = 2;

/// Bounded counter: `clamp(value + delta * step, min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stepper {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Stepper {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max, step: 1 }
    }

    pub fn apply(&self, value: u32, delta: i32) -> u32 {
        let next = i64::from(value) + i64::from(delta) * i64::from(self.step);
        next.clamp(i64::from(self.min), i64::from(self.max.max(self.min))) as u32
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(0, u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestType {
    Adults,
    Children,
    Babies,
    Pets,
}

/// Per-type stepper bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestLimits {
    pub adults: Stepper,
    pub children: Stepper,
    pub babies: Stepper,
    pub pets: Stepper,
}

impl GuestLimits {
    pub fn stepper(&self, guest_type: GuestType) -> Stepper {
        match guest_type {
            GuestType::Adults => self.adults,
            GuestType::Children => self.children,
            GuestType::Babies => self.babies,
            GuestType::Pets => self.pets,
        }
    }
}

impl Default for GuestLimits {
    fn default() -> Self {
        Self {
            adults: Stepper::new(MIN_ADULTS, u32::MAX),
            children: Stepper::default(),
            babies: Stepper::default(),
            pets: Stepper::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCounts {
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub babies: u32,
    #[serde(default)]
    pub pets: u32,
}

impl GuestCounts {
    /// Start from a guest total, all of them adults
    pub fn from_total(total: Option<u32>) -> Self {
        Self {
            adults: total.unwrap_or(DEFAULT_ADULTS).max(MIN_ADULTS),
            children: 0,
            babies: 0,
            pets: 0,
        }
    }

    pub fn get(&self, guest_type: GuestType) -> u32 {
        match guest_type {
            GuestType::Adults => self.adults,
            GuestType::Children => self.children,
            GuestType::Babies => self.babies,
            GuestType::Pets => self.pets,
        }
    }

    /// Step one guest type up or down within `limits`
    pub fn update(&mut self, guest_type: GuestType, delta: i32, limits: &GuestLimits) {
        let next = limits.stepper(guest_type).apply(self.get(guest_type), delta);
        match guest_type {
            GuestType::Adults => self.adults = next,
            GuestType::Children => self.children = next,
            GuestType::Babies => self.babies = next,
            GuestType::Pets => self.pets = next,
        }
    }

    /// People staying; pets are not guests. Saturates at `u32::MAX`.
    pub fn total_guests(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.babies)
    }

    /// Guest total sent with a search or booking, never below one adult
    pub fn submitted_guests(&self) -> u32 {
        self.total_guests().max(MIN_ADULTS)
    }

    /// Button label, e.g. `3 hóspedes, 1 pet`
    pub fn label_pt(&self) -> String {
        let total = self.total_guests();
        let guests = if total == 1 {
            "1 hóspede".to_string()
        } else {
            format!("{} hóspedes", total)
        };

        match self.pets {
            0 => guests,
            1 => format!("{}, 1 pet", guests),
            n => format!("{}, {} pets", guests, n),
        }
    }
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self::from_total(None)
    }
}
