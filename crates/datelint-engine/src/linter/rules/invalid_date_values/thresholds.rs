//! Legal ranges of calendar fields, keyed by every name a field goes by.

use rustc_hash::FxHashMap;

/// One of the calendar fields whose range is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Month,
    DayOfMonth,
    HourOfDay,
    Minute,
    Second,
}

/// The names a field is known by at different call-sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aliases {
    /// `java.util.Date` setter, e.g. `setMonth`.
    pub setter: &'static str,
    /// `java.util.Date` getter, e.g. `getMonth`.
    pub getter: &'static str,
    /// `java.util.Calendar` constant, e.g. `MONTH`.
    pub constant: &'static str,
    /// `GregorianCalendar` constructor parameter, e.g. `month`.
    pub parameter: &'static str,
}

impl DateField {
    pub const ALL: [DateField; 5] = [
        DateField::Month,
        DateField::DayOfMonth,
        DateField::HourOfDay,
        DateField::Minute,
        DateField::Second,
    ];

    /// Largest legal value. The smallest is always 0.
    ///
    /// Months are zero-based; minutes and seconds leave room for leap
    /// seconds the way `java.util.Date` documents them.
    pub fn upper_bound(self) -> i64 {
        match self {
            DateField::Month => 11,
            DateField::DayOfMonth => 31,
            DateField::HourOfDay => 23,
            DateField::Minute => 60,
            DateField::Second => 61,
        }
    }

    pub fn aliases(self) -> Aliases {
        let (setter, getter, constant, parameter) = match self {
            DateField::Month => ("setMonth", "getMonth", "MONTH", "month"),
            DateField::DayOfMonth => ("setDate", "getDate", "DAY_OF_MONTH", "dayOfMonth"),
            DateField::HourOfDay => ("setHours", "getHours", "HOUR_OF_DAY", "hourOfDay"),
            DateField::Minute => ("setMinutes", "getMinutes", "MINUTE", "minute"),
            DateField::Second => ("setSeconds", "getSeconds", "SECOND", "second"),
        };
        Aliases {
            setter,
            getter,
            constant,
            parameter,
        }
    }

    /// Field set by the `GregorianCalendar` constructor argument at
    /// `position`. Position 0 is the year, which has no range; positions
    /// past the seconds argument are not fields.
    pub fn from_constructor_position(position: usize) -> Option<DateField> {
        match position {
            1 => Some(DateField::Month),
            2 => Some(DateField::DayOfMonth),
            3 => Some(DateField::HourOfDay),
            4 => Some(DateField::Minute),
            5 => Some(DateField::Second),
            _ => None,
        }
    }
}

/// Maps every alias of every [`DateField`] to the field.
///
/// Built once per rule instance and never mutated.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    by_name: FxHashMap<&'static str, DateField>,
}

impl ThresholdTable {
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        for field in DateField::ALL {
            let a = field.aliases();
            for name in [a.setter, a.getter, a.constant, a.parameter] {
                by_name.insert(name, field);
            }
        }
        Self { by_name }
    }

    /// The field `name` refers to.
    pub fn field(&self, name: &str) -> Option<DateField> {
        self.by_name.get(name).copied()
    }

    /// Inclusive upper bound for the field `name` refers to.
    pub fn upper_bound(&self, name: &str) -> Option<i64> {
        self.field(name).map(DateField::upper_bound)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::new()
    }
}
