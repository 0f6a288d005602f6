//! Unit catalog: categories, units and their base factors
//!
//! The catalog is immutable once loaded. It comes either from the built-in
//! table below or from a JSON file named in the parser settings, and is
//! validated before any index is built on top of it.

use crate::shared::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use ts_rs::TS;

/// Closed set of measurement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub enum CategoryId {
    Length,
    Mass,
    Volume,
    Area,
    Temperature,
    Time,
    Speed,
    Pressure,
    Energy,
    Power,
    Data,
    Angle,
    Frequency,
    #[serde(rename = "Fuel Economy")]
    FuelEconomy,
}

impl CategoryId {
    pub const ALL: [CategoryId; 14] = [
        CategoryId::Length,
        CategoryId::Mass,
        CategoryId::Volume,
        CategoryId::Area,
        CategoryId::Temperature,
        CategoryId::Time,
        CategoryId::Speed,
        CategoryId::Pressure,
        CategoryId::Energy,
        CategoryId::Power,
        CategoryId::Data,
        CategoryId::Angle,
        CategoryId::Frequency,
        CategoryId::FuelEconomy,
    ];

    /// Display name, identical to the serialized form
    pub fn name(self) -> &'static str {
        match self {
            CategoryId::Length => "Length",
            CategoryId::Mass => "Mass",
            CategoryId::Volume => "Volume",
            CategoryId::Area => "Area",
            CategoryId::Temperature => "Temperature",
            CategoryId::Time => "Time",
            CategoryId::Speed => "Speed",
            CategoryId::Pressure => "Pressure",
            CategoryId::Energy => "Energy",
            CategoryId::Power => "Power",
            CategoryId::Data => "Data",
            CategoryId::Angle => "Angle",
            CategoryId::Frequency => "Frequency",
            CategoryId::FuelEconomy => "Fuel Economy",
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Measurement system a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub enum UnitKind {
    Metric,
    Imperial,
    UsCustomary,
    Nautical,
    Binary,
}

/// A single unit within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub struct Unit {
    pub symbol: String,
    pub display_name: String,
    /// Multiplier to the category base unit. `None` for formula-based units
    /// (temperature scales, inverse fuel consumption).
    #[serde(default)]
    #[ts(optional)]
    pub base_factor: Option<f64>,
    #[serde(default)]
    #[ts(optional)]
    pub unit_kind: Option<UnitKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub id: CategoryId,
    pub units: Vec<Unit>,
}

impl Category {
    pub fn unit(&self, symbol: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.symbol == symbol)
    }
}

/// Validated, ordered collection of categories
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCatalog {
    categories: Vec<Category>,
}

impl UnitCatalog {
    /// Build a catalog from categories, rejecting structural problems
    pub fn new(categories: Vec<Category>) -> ConfigResult<Self> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(id, units)| Category {
                id: *id,
                units: units
                    .iter()
                    .map(|b| Unit {
                        symbol: b.0.to_string(),
                        display_name: b.1.to_string(),
                        base_factor: b.2,
                        unit_kind: b.3,
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Every unit in catalog order, paired with its category
    pub fn units(&self) -> impl Iterator<Item = (CategoryId, &Unit)> {
        self.categories
            .iter()
            .flat_map(|c| c.units.iter().map(move |u| (c.id, u)))
    }

    pub fn unit_count(&self) -> usize {
        self.categories.iter().map(|c| c.units.len()).sum()
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.categories.is_empty() {
            return Err(ConfigError::InvalidCatalog("catalog has no categories".to_string()));
        }

        let mut seen_categories = HashSet::new();
        for category in &self.categories {
            if !seen_categories.insert(category.id) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "category {} is defined twice",
                    category.id
                )));
            }
            // A default target must always differ from its source
            if category.units.len() < 2 {
                return Err(ConfigError::InvalidCatalog(format!(
                    "category {} needs at least two units",
                    category.id
                )));
            }

            let mut seen_symbols = HashSet::new();
            for unit in &category.units {
                if unit.symbol.trim().is_empty() || unit.display_name.trim().is_empty() {
                    return Err(ConfigError::InvalidCatalog(format!(
                        "category {} has a unit with an empty symbol or name",
                        category.id
                    )));
                }
                if !seen_symbols.insert(unit.symbol.as_str()) {
                    return Err(ConfigError::InvalidCatalog(format!(
                        "duplicate symbol '{}' in category {}",
                        unit.symbol, category.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Built-in catalog
// ============================================================================

struct BuiltinUnit(&'static str, &'static str, Option<f64>, Option<UnitKind>);

use UnitKind::{Binary, Imperial, Metric, Nautical, UsCustomary};

const LENGTH: &[BuiltinUnit] = &[
    BuiltinUnit("m", "Meter", Some(1.0), Some(Metric)),
    BuiltinUnit("km", "Kilometer", Some(1000.0), Some(Metric)),
    BuiltinUnit("cm", "Centimeter", Some(0.01), Some(Metric)),
    BuiltinUnit("mm", "Millimeter", Some(0.001), Some(Metric)),
    BuiltinUnit("µm", "Micrometer", Some(1e-6), Some(Metric)),
    BuiltinUnit("nm", "Nanometer", Some(1e-9), Some(Metric)),
    BuiltinUnit("mi", "Mile", Some(1609.344), Some(Imperial)),
    BuiltinUnit("yd", "Yard", Some(0.9144), Some(Imperial)),
    BuiltinUnit("ft", "Foot", Some(0.3048), Some(Imperial)),
    BuiltinUnit("in", "Inch", Some(0.0254), Some(Imperial)),
    BuiltinUnit("nmi", "Nautical Mile", Some(1852.0), Some(Nautical)),
];

const MASS: &[BuiltinUnit] = &[
    BuiltinUnit("kg", "Kilogram", Some(1.0), Some(Metric)),
    BuiltinUnit("g", "Gram", Some(0.001), Some(Metric)),
    BuiltinUnit("mg", "Milligram", Some(1e-6), Some(Metric)),
    BuiltinUnit("µg", "Microgram", Some(1e-9), Some(Metric)),
    BuiltinUnit("t", "Tonne", Some(1000.0), Some(Metric)),
    BuiltinUnit("lb", "Pound", Some(0.453_592_37), Some(Imperial)),
    BuiltinUnit("oz", "Ounce", Some(0.028_349_523_125), Some(Imperial)),
    BuiltinUnit("st", "Stone", Some(6.350_293_18), Some(Imperial)),
    BuiltinUnit("ton", "Ton (US)", Some(907.184_74), Some(UsCustomary)),
];

const VOLUME: &[BuiltinUnit] = &[
    BuiltinUnit("L", "Liter", Some(1.0), Some(Metric)),
    BuiltinUnit("mL", "Milliliter", Some(0.001), Some(Metric)),
    BuiltinUnit("m³", "Cubic Meter", Some(1000.0), Some(Metric)),
    BuiltinUnit("cm³", "Cubic Centimeter", Some(0.001), Some(Metric)),
    BuiltinUnit("in³", "Cubic Inch", Some(0.016_387_064), Some(UsCustomary)),
    BuiltinUnit("ft³", "Cubic Foot", Some(28.316_846_592), Some(UsCustomary)),
    BuiltinUnit("gal", "Gallon (US)", Some(3.785_411_784), Some(UsCustomary)),
    BuiltinUnit("imp gal", "Gallon (UK)", Some(4.546_09), Some(Imperial)),
    BuiltinUnit("qt", "Quart (US)", Some(0.946_352_946), Some(UsCustomary)),
    BuiltinUnit("pt", "Pint (US)", Some(0.473_176_473), Some(UsCustomary)),
    BuiltinUnit("cup", "Cup (US)", Some(0.236_588_236_5), Some(UsCustomary)),
    BuiltinUnit("fl oz", "Fluid Ounce (US)", Some(0.029_573_529_562_5), Some(UsCustomary)),
    BuiltinUnit("tbsp", "Tablespoon", Some(0.014_786_764_781_25), Some(UsCustomary)),
    BuiltinUnit("tsp", "Teaspoon", Some(0.004_928_921_593_75), Some(UsCustomary)),
];

const AREA: &[BuiltinUnit] = &[
    BuiltinUnit("m²", "Square Meter", Some(1.0), Some(Metric)),
    BuiltinUnit("km²", "Square Kilometer", Some(1e6), Some(Metric)),
    BuiltinUnit("cm²", "Square Centimeter", Some(1e-4), Some(Metric)),
    BuiltinUnit("mm²", "Square Millimeter", Some(1e-6), Some(Metric)),
    BuiltinUnit("ha", "Hectare", Some(1e4), Some(Metric)),
    BuiltinUnit("ac", "Acre", Some(4_046.856_422_4), Some(Imperial)),
    BuiltinUnit("mi²", "Square Mile", Some(2_589_988.110_336), Some(Imperial)),
    BuiltinUnit("yd²", "Square Yard", Some(0.836_127_36), Some(Imperial)),
    BuiltinUnit("ft²", "Square Foot", Some(0.092_903_04), Some(Imperial)),
    BuiltinUnit("in²", "Square Inch", Some(0.000_645_16), Some(Imperial)),
];

const TEMPERATURE: &[BuiltinUnit] = &[
    BuiltinUnit("°C", "Celsius", None, Some(Metric)),
    BuiltinUnit("°F", "Fahrenheit", None, Some(Imperial)),
    BuiltinUnit("K", "Kelvin", None, Some(Metric)),
    BuiltinUnit("°R", "Rankine", None, Some(Imperial)),
];

const TIME: &[BuiltinUnit] = &[
    BuiltinUnit("s", "Second", Some(1.0), None),
    BuiltinUnit("ms", "Millisecond", Some(1e-3), None),
    BuiltinUnit("µs", "Microsecond", Some(1e-6), None),
    BuiltinUnit("ns", "Nanosecond", Some(1e-9), None),
    BuiltinUnit("min", "Minute", Some(60.0), None),
    BuiltinUnit("h", "Hour", Some(3600.0), None),
    BuiltinUnit("d", "Day", Some(86_400.0), None),
    BuiltinUnit("wk", "Week", Some(604_800.0), None),
    BuiltinUnit("mo", "Month", Some(2_629_746.0), None),
    BuiltinUnit("yr", "Year", Some(31_556_952.0), None),
];

const SPEED: &[BuiltinUnit] = &[
    BuiltinUnit("m/s", "Meter per Second", Some(1.0), Some(Metric)),
    BuiltinUnit("km/h", "Kilometer per Hour", Some(1.0 / 3.6), Some(Metric)),
    BuiltinUnit("mph", "Mile per Hour", Some(0.447_04), Some(Imperial)),
    BuiltinUnit("kn", "Knot", Some(1852.0 / 3600.0), Some(Nautical)),
    BuiltinUnit("ft/s", "Foot per Second", Some(0.3048), Some(Imperial)),
];

const PRESSURE: &[BuiltinUnit] = &[
    BuiltinUnit("Pa", "Pascal", Some(1.0), Some(Metric)),
    BuiltinUnit("kPa", "Kilopascal", Some(1e3), Some(Metric)),
    BuiltinUnit("MPa", "Megapascal", Some(1e6), Some(Metric)),
    BuiltinUnit("bar", "Bar", Some(1e5), Some(Metric)),
    BuiltinUnit("mbar", "Millibar", Some(100.0), Some(Metric)),
    BuiltinUnit("atm", "Atmosphere", Some(101_325.0), None),
    BuiltinUnit("psi", "Pound per Square Inch", Some(6_894.757_293_168), Some(Imperial)),
    BuiltinUnit("mmHg", "Millimeter of Mercury", Some(133.322_387_415), None),
    BuiltinUnit("inHg", "Inch of Mercury", Some(3_386.388_640_341), Some(Imperial)),
    BuiltinUnit("Torr", "Torr", Some(101_325.0 / 760.0), None),
];

const ENERGY: &[BuiltinUnit] = &[
    BuiltinUnit("J", "Joule", Some(1.0), Some(Metric)),
    BuiltinUnit("kJ", "Kilojoule", Some(1e3), Some(Metric)),
    BuiltinUnit("cal", "Calorie", Some(4.184), None),
    BuiltinUnit("kcal", "Kilocalorie", Some(4184.0), None),
    BuiltinUnit("Wh", "Watt-hour", Some(3600.0), Some(Metric)),
    BuiltinUnit("kWh", "Kilowatt-hour", Some(3.6e6), Some(Metric)),
    BuiltinUnit("eV", "Electronvolt", Some(1.602_176_634e-19), None),
    BuiltinUnit("BTU", "British Thermal Unit", Some(1_055.055_852_62), Some(Imperial)),
];

const POWER: &[BuiltinUnit] = &[
    BuiltinUnit("W", "Watt", Some(1.0), Some(Metric)),
    BuiltinUnit("kW", "Kilowatt", Some(1e3), Some(Metric)),
    BuiltinUnit("MW", "Megawatt", Some(1e6), Some(Metric)),
    BuiltinUnit("hp", "Horsepower", Some(745.699_871_582_270_2), Some(Imperial)),
    BuiltinUnit("PS", "Metric Horsepower", Some(735.498_75), Some(Metric)),
    BuiltinUnit("BTU/h", "BTU per Hour", Some(0.293_071_07), Some(Imperial)),
];

const DATA: &[BuiltinUnit] = &[
    BuiltinUnit("B", "Byte", Some(1.0), None),
    BuiltinUnit("KB", "Kilobyte", Some(1e3), Some(Metric)),
    BuiltinUnit("MB", "Megabyte", Some(1e6), Some(Metric)),
    BuiltinUnit("GB", "Gigabyte", Some(1e9), Some(Metric)),
    BuiltinUnit("TB", "Terabyte", Some(1e12), Some(Metric)),
    BuiltinUnit("KiB", "Kibibyte", Some(1024.0), Some(Binary)),
    BuiltinUnit("MiB", "Mebibyte", Some(1_048_576.0), Some(Binary)),
    BuiltinUnit("GiB", "Gibibyte", Some(1_073_741_824.0), Some(Binary)),
    BuiltinUnit("bit", "Bit", Some(0.125), None),
    BuiltinUnit("Kb", "Kilobit", Some(125.0), Some(Metric)),
    BuiltinUnit("Mb", "Megabit", Some(125_000.0), Some(Metric)),
    BuiltinUnit("Gb", "Gigabit", Some(1.25e8), Some(Metric)),
];

const ANGLE: &[BuiltinUnit] = &[
    BuiltinUnit("rad", "Radian", Some(1.0), Some(Metric)),
    BuiltinUnit("°", "Degree", Some(std::f64::consts::PI / 180.0), None),
    BuiltinUnit("grad", "Gradian", Some(std::f64::consts::PI / 200.0), None),
    BuiltinUnit("arcmin", "Arcminute", Some(std::f64::consts::PI / 10_800.0), None),
    BuiltinUnit("arcsec", "Arcsecond", Some(std::f64::consts::PI / 648_000.0), None),
    BuiltinUnit("mrad", "Milliradian", Some(1e-3), Some(Metric)),
    BuiltinUnit("turn", "Turn", Some(std::f64::consts::TAU), None),
];

const FREQUENCY: &[BuiltinUnit] = &[
    BuiltinUnit("Hz", "Hertz", Some(1.0), Some(Metric)),
    BuiltinUnit("kHz", "Kilohertz", Some(1e3), Some(Metric)),
    BuiltinUnit("MHz", "Megahertz", Some(1e6), Some(Metric)),
    BuiltinUnit("GHz", "Gigahertz", Some(1e9), Some(Metric)),
    BuiltinUnit("rpm", "Revolution per Minute", Some(1.0 / 60.0), None),
];

const FUEL_ECONOMY: &[BuiltinUnit] = &[
    BuiltinUnit("km/L", "Kilometer per Liter", Some(1.0), Some(Metric)),
    BuiltinUnit("L/100km", "Liter per 100 Kilometers", None, Some(Metric)),
    BuiltinUnit("mpg", "Mile per Gallon (US)", Some(0.425_143_707), Some(UsCustomary)),
    BuiltinUnit("mpg imp", "Mile per Gallon (UK)", Some(0.354_006_189), Some(Imperial)),
];

const BUILTIN: &[(CategoryId, &[BuiltinUnit])] = &[
    (CategoryId::Length, LENGTH),
    (CategoryId::Mass, MASS),
    (CategoryId::Volume, VOLUME),
    (CategoryId::Area, AREA),
    (CategoryId::Temperature, TEMPERATURE),
    (CategoryId::Time, TIME),
    (CategoryId::Speed, SPEED),
    (CategoryId::Pressure, PRESSURE),
    (CategoryId::Energy, ENERGY),
    (CategoryId::Power, POWER),
    (CategoryId::Data, DATA),
    (CategoryId::Angle, ANGLE),
    (CategoryId::Frequency, FREQUENCY),
    (CategoryId::FuelEconomy, FUEL_ECONOMY),
];
