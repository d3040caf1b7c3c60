//! Table, key and set-attribute descriptors.
//!
//! Pure data used by store adapters in place of raw table and attribute
//! strings. All functions are sync and have no side effects.

use std::fmt;

use uuid::Uuid;

pub const FLIGHTS_TABLE: &str = "flights";
pub const PASSENGERS_TABLE: &str = "passengers";

pub const FLIGHT_NUMBER_KEY: &str = "number";
pub const PASSENGER_ID_KEY: &str = "id";

/// Tables known to the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Flights,
    Passengers,
}

impl Table {
    /// Name of the partition key attribute.
    pub fn partition_key(self) -> &'static str {
        match self {
            Table::Flights => FLIGHT_NUMBER_KEY,
            Table::Passengers => PASSENGER_ID_KEY,
        }
    }

    /// Table name used when no override is configured.
    pub fn default_name(self) -> &'static str {
        match self {
            Table::Flights => FLIGHTS_TABLE,
            Table::Passengers => PASSENGERS_TABLE,
        }
    }

    /// Entity stored in the table, for error messages.
    pub const fn entity_type(self) -> &'static str {
        match self {
            Table::Flights => "Flight",
            Table::Passengers => "Passenger",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Physical table names, resolved once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub flights: String,
    pub passengers: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            flights: FLIGHTS_TABLE.to_string(),
            passengers: PASSENGERS_TABLE.to_string(),
        }
    }
}

impl TableNames {
    /// Physical name of the given table.
    pub fn name(&self, table: Table) -> &str {
        match table {
            Table::Flights => &self.flights,
            Table::Passengers => &self.passengers,
        }
    }
}

/// Addresses a single item by its partition key value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub table: Table,
    pub value: String,
}

impl ItemKey {
    /// Key of a flight item.
    pub fn flight(number: impl Into<String>) -> Self {
        Self {
            table: Table::Flights,
            value: number.into(),
        }
    }

    /// Key of a passenger item.
    pub fn passenger(id: Uuid) -> Self {
        Self {
            table: Table::Passengers,
            value: id.to_string(),
        }
    }

    /// Name of the partition key attribute for this item's table.
    pub fn key_name(&self) -> &'static str {
        self.table.partition_key()
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key_name(), self.value)
    }
}

/// A string-set (`SS`) attribute on a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringSet {
    pub table: Table,
    pub attribute: &'static str,
}

/// Passenger IDs booked on a flight.
pub const FLIGHT_PASSENGERS: StringSet = StringSet {
    table: Table::Flights,
    attribute: "passengers",
};

impl StringSet {
    /// Key of the item owning this set, so the set and key can never point
    /// at different tables.
    pub fn key(&self, value: impl Into<String>) -> ItemKey {
        ItemKey {
            table: self.table,
            value: value.into(),
        }
    }
}

/// Atomic update applied to a string set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMutation {
    Add,
    Remove,
}

impl SetMutation {
    /// Update expression, with `#0` naming the set attribute and `:0` the
    /// one-element value set.
    pub fn update_expression(self) -> &'static str {
        match self {
            SetMutation::Add => "ADD #0 :0",
            SetMutation::Remove => "DELETE #0 :0",
        }
    }

    /// Operation name, for logs and error messages.
    pub fn operation(self) -> &'static str {
        match self {
            SetMutation::Add => "AddToSet",
            SetMutation::Remove => "RemoveFromSet",
        }
    }
}
