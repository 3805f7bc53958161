//! Asset type, subtype and operation tables.
//!
//! These mirror the database enum columns one-for-one: the numeric ids are
//! persisted, so they are frozen; new entries may only be appended. String
//! parsing is case-insensitive and accepts the historical alias spellings
//! ("vm", "rack controller", "patch panel").

/// `t_bios_asset_ext_attributes.keytag` column width.
pub const MAX_KEYTAG_LENGTH: usize = 40;
/// `t_bios_asset_ext_attributes.value` column width.
pub const MAX_VALUE_LENGTH: usize = 255;

/// Asset element type, as stored in `t_bios_asset_element_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum AssetType {
    Unknown = 0,
    Group = 1,
    Datacenter = 2,
    Room = 3,
    Row = 4,
    Rack = 5,
    Device = 6,
}

impl AssetType {
    /// Parses a type name, case-insensitively. Unrecognized names map to
    /// `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let candidates = [
            ("datacenter", Self::Datacenter),
            ("room", Self::Room),
            ("row", Self::Row),
            ("rack", Self::Rack),
            ("group", Self::Group),
            ("device", Self::Device),
        ];
        for (candidate, ty) in candidates {
            if name.eq_ignore_ascii_case(candidate) {
                return ty;
            }
        }
        Self::Unknown
    }

    /// Maps a persisted numeric id back to the type. Unknown ids map to
    /// `Unknown`.
    #[must_use]
    pub fn from_id(id: u16) -> Self {
        match id {
            1 => Self::Group,
            2 => Self::Datacenter,
            3 => Self::Room,
            4 => Self::Row,
            5 => Self::Rack,
            6 => Self::Device,
            _ => Self::Unknown,
        }
    }

    /// The persisted numeric id.
    #[must_use]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// The canonical database name; `"N_A"` for `Unknown`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Datacenter => "datacenter",
            Self::Room => "room",
            Self::Row => "row",
            Self::Rack => "rack",
            Self::Group => "group",
            Self::Device => "device",
            Self::Unknown => "N_A",
        }
    }
}

/// Asset device subtype, as stored in `t_bios_asset_device_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum AssetSubtype {
    Unknown = 0,
    Ups = 1,
    Genset = 2,
    Epdu = 3,
    Pdu = 4,
    Server = 5,
    Feed = 6,
    Sts = 7,
    Switch = 8,
    Storage = 9,
    Virtual = 10,
    // Id 11 is the default for types without a subtype; referenced from
    // initdb.sql, never renumber.
    NotApplicable = 11,
    Router = 12,
    RackController = 13,
    Sensor = 14,
    Appliance = 15,
    Chassis = 16,
    PatchPanel = 17,
    Other = 18,
    SensorGpio = 19,
    Gpo = 20,
}

impl AssetSubtype {
    /// Parses a subtype name, case-insensitively, accepting the alias
    /// spellings. The empty string and `"n_a"` map to `NotApplicable`;
    /// unrecognized names map to `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            return Self::NotApplicable;
        }
        let candidates = [
            ("ups", Self::Ups),
            ("genset", Self::Genset),
            ("epdu", Self::Epdu),
            ("server", Self::Server),
            ("pdu", Self::Pdu),
            ("feed", Self::Feed),
            ("sts", Self::Sts),
            ("switch", Self::Switch),
            ("storage", Self::Storage),
            ("vm", Self::Virtual),
            ("router", Self::Router),
            ("rack controller", Self::RackController),
            ("rackcontroller", Self::RackController),
            ("sensor", Self::Sensor),
            ("sensorgpio", Self::SensorGpio),
            ("gpo", Self::Gpo),
            ("appliance", Self::Appliance),
            ("chassis", Self::Chassis),
            ("patch panel", Self::PatchPanel),
            ("patchpanel", Self::PatchPanel),
            ("other", Self::Other),
            ("n_a", Self::NotApplicable),
        ];
        for (candidate, subtype) in candidates {
            if name.eq_ignore_ascii_case(candidate) {
                return subtype;
            }
        }
        Self::Unknown
    }

    /// Maps a persisted numeric id back to the subtype. Unknown ids map to
    /// `Unknown`.
    #[must_use]
    pub fn from_id(id: u16) -> Self {
        match id {
            1 => Self::Ups,
            2 => Self::Genset,
            3 => Self::Epdu,
            4 => Self::Pdu,
            5 => Self::Server,
            6 => Self::Feed,
            7 => Self::Sts,
            8 => Self::Switch,
            9 => Self::Storage,
            10 => Self::Virtual,
            11 => Self::NotApplicable,
            12 => Self::Router,
            13 => Self::RackController,
            14 => Self::Sensor,
            15 => Self::Appliance,
            16 => Self::Chassis,
            17 => Self::PatchPanel,
            18 => Self::Other,
            19 => Self::SensorGpio,
            20 => Self::Gpo,
            _ => Self::Unknown,
        }
    }

    /// The persisted numeric id.
    #[must_use]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// The canonical database name; `"N_A"` for both `NotApplicable` and
    /// `Unknown`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ups => "ups",
            Self::Genset => "genset",
            Self::Storage => "storage",
            Self::Sts => "sts",
            Self::Feed => "feed",
            Self::Epdu => "epdu",
            Self::Pdu => "pdu",
            Self::Server => "server",
            Self::Switch => "switch",
            Self::Router => "router",
            Self::RackController => "rackcontroller",
            Self::Sensor => "sensor",
            Self::SensorGpio => "sensorgpio",
            Self::Gpo => "gpo",
            Self::Appliance => "appliance",
            Self::Chassis => "chassis",
            Self::PatchPanel => "patchpanel",
            Self::Other => "other",
            Self::Virtual => "vm",
            Self::NotApplicable | Self::Unknown => "N_A",
        }
    }
}

/// Asset lifecycle operation carried in asset messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AssetOperation {
    Insert = 1,
    Delete = 2,
    Update = 3,
    Get = 4,
    Retire = 5,
    Inventory = 6,
}

impl AssetOperation {
    /// Parses an operation name, case-insensitively. Unrecognized names
    /// have always fallen back to `Inventory`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let candidates = [
            ("create", Self::Insert),
            ("delete", Self::Delete),
            ("retire", Self::Retire),
            ("inventory", Self::Inventory),
            ("update", Self::Update),
            ("get", Self::Get),
        ];
        for (candidate, op) in candidates {
            if name.eq_ignore_ascii_case(candidate) {
                return op;
            }
        }
        Self::Inventory
    }

    /// The wire name of the operation. `Insert` is spelled `"create"` on
    /// the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Insert => "create",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Get => "get",
            Self::Retire => "retire",
            Self::Inventory => "inventory",
        }
    }
}

/// Whether assets can be placed inside an asset of this type.
#[must_use]
pub fn is_container(ty: AssetType) -> bool {
    matches!(
        ty,
        AssetType::Datacenter | AssetType::Room | AssetType::Row | AssetType::Rack
    )
}

/// Whether `id` is a known element type id.
#[must_use]
pub fn is_ok_element_type(id: u16) -> bool {
    AssetType::from_id(id) != AssetType::Unknown
}

/// Whether `name` is usable as an asset name: non-empty and free of the
/// reserved characters `_`, `%` and `@`.
#[must_use]
pub fn is_ok_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['_', '%', '@'])
}

/// Whether `keytag` fits the ext-attribute keytag column.
#[must_use]
pub fn is_ok_keytag(keytag: &str) -> bool {
    (1..=MAX_KEYTAG_LENGTH).contains(&keytag.len())
}

/// Whether `value` fits the ext-attribute value column.
#[must_use]
pub fn is_ok_value(value: &str) -> bool {
    (1..=MAX_VALUE_LENGTH).contains(&value.len())
}

/// Whether `link_type_id` is a valid link type id.
#[must_use]
pub fn is_ok_link_type(link_type_id: u8) -> bool {
    link_type_id > 0
}
