//! The master list of unit symbols.
//!
//! One macro invocation generates both a constructor function per unit
//! (`micrometres(10.0)`) and the [`UNIT_DEFINITIONS`] table the parser
//! resolves suffixes against, so the two can never disagree on a
//! coefficient.
//!
//! Every prefixed form is spelled out as its own entry. Coefficients are
//! relative to the internal base units, where mass is measured in grams:
//! `1 N` is stored as `1000`, and `1 mM` (one mole per cubic metre) as `1`.
//! Compound symbols such as `m/s` are opaque keys, not expressions.

use crate::dynamic::DynUnit;
use crate::exponents::Exponents;
use crate::quantity::*;
use crate::Real;

/// One entry of the fixed symbol table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDefinition {
    /// The suffix as written after a number, e.g. `"um"`.
    pub symbol: &'static str,
    /// Factor converting a value in this unit to internal base units.
    pub coefficient: Real,
    /// The unit's dimension.
    pub exponents: Exponents,
}

impl UnitDefinition {
    /// Build the dynamic value of `value` expressed in this unit.
    pub fn construct(&self, value: Real) -> DynUnit {
        DynUnit::new(value * self.coefficient, self.exponents)
    }

    /// Look up a symbol in [`UNIT_DEFINITIONS`].
    pub fn find(symbol: &str) -> Option<&'static UnitDefinition> {
        UNIT_DEFINITIONS.iter().find(|def| def.symbol == symbol)
    }
}

macro_rules! define_units {
    ($($name:ident => $symbol:literal : $quantity:ty = $coefficient:expr;)*) => {
        $(
            #[doc = concat!("A value given in `", $symbol, "`.")]
            #[inline]
            pub fn $name(value: Real) -> $quantity {
                <$quantity>::new(value * $coefficient)
            }
        )*

        /// Every built-in symbol, in declaration order.
        pub static UNIT_DEFINITIONS: &[UnitDefinition] = &[
            $(
                UnitDefinition {
                    symbol: $symbol,
                    coefficient: $coefficient,
                    exponents: <$quantity>::EXPONENTS,
                },
            )*
        ];
    };
}

define_units! {
    // Length
    metres => "m": Length = 1.0;
    kilometres => "km": Length = 1e3;
    decimetres => "dm": Length = 1e-1;
    centimetres => "cm": Length = 1e-2;
    millimetres => "mm": Length = 1e-3;
    micrometres => "um": Length = 1e-6;
    nanometres => "nm": Length = 1e-9;

    // Time
    seconds => "s": Time = 1.0;
    milliseconds => "ms": Time = 1e-3;
    microseconds => "us": Time = 1e-6;
    nanoseconds => "ns": Time = 1e-9;
    minutes => "min": Time = 60.0;
    hours => "h": Time = 3600.0;

    // Mass
    kilograms => "kg": Mass = 1e3;
    grams => "g": Mass = 1.0;
    decigrams => "dg": Mass = 1e-1;
    milligrams => "mg": Mass = 1e-3;
    micrograms => "ug": Mass = 1e-6;
    nanograms => "ng": Mass = 1e-9;
    picograms => "pg": Mass = 1e-12;

    // Electric current
    amperes => "A": ElectricCurrent = 1.0;
    milliamperes => "mA": ElectricCurrent = 1e-3;
    microamperes => "uA": ElectricCurrent = 1e-6;

    // Temperature
    kelvins => "K": Temperature = 1.0;

    // Amount of substance
    moles => "mol": AmountOfSubstance = 1.0;
    millimoles => "mmol": AmountOfSubstance = 1e-3;
    micromoles => "umol": AmountOfSubstance = 1e-6;
    nanomoles => "nmol": AmountOfSubstance = 1e-9;

    // Luminous intensity
    candelas => "cd": LuminousIntensity = 1.0;

    // Area
    square_metres => "m2": Area = 1.0;
    square_decimetres => "dm2": Area = 1e-2;
    square_centimetres => "cm2": Area = 1e-4;
    square_millimetres => "mm2": Area = 1e-6;
    square_micrometres => "um2": Area = 1e-12;

    // Volume
    cubic_metres => "m3": Volume = 1.0;
    cubic_decimetres => "dm3": Volume = 1e-3;
    cubic_centimetres => "cm3": Volume = 1e-6;
    cubic_millimetres => "mm3": Volume = 1e-9;
    cubic_micrometres => "um3": Volume = 1e-18;
    litres => "l": Volume = 1e-3;
    millilitres => "ml": Volume = 1e-6;
    microlitres => "ul": Volume = 1e-9;

    // Velocity
    metres_per_second => "m/s": Velocity = 1.0;
    millimetres_per_second => "mm/s": Velocity = 1e-3;
    micrometres_per_second => "um/s": Velocity = 1e-6;

    // Acceleration
    metres_per_second_squared => "m/s2": Acceleration = 1.0;
    millimetres_per_second_squared => "mm/s2": Acceleration = 1e-3;
    micrometres_per_second_squared => "um/s2": Acceleration = 1e-6;

    // Force
    newtons => "N": Force = 1e3;
    millinewtons => "mN": Force = 1.0;
    micronewtons => "uN": Force = 1e-3;
    kilogram_metres_per_second_squared => "kgm/s2": Force = 1e3;

    // Dynamic viscosity
    newton_seconds_per_square_metre => "Ns/m2": DynamicViscosity = 1e3;
    pascal_seconds => "Pas": DynamicViscosity = 1e3;
    millipascal_seconds => "mPas": DynamicViscosity = 1.0;

    // Kinematic viscosity and diffusion
    square_metres_per_second => "m2/s": KinematicViscosity = 1.0;
    square_millimetres_per_second => "mm2/s": KinematicViscosity = 1e-6;
    square_micrometres_per_second => "um2/s": KinematicViscosity = 1e-12;

    // Pressure, energy, power
    pascals => "Pa": Pressure = 1e3;
    kilopascals => "kPa": Pressure = 1e6;
    joules => "J": Energy = 1e3;
    watts => "W": Power = 1e3;

    // Frequency
    hertz => "Hz": Frequency = 1.0;
    kilohertz => "kHz": Frequency = 1e3;
    megahertz => "MHz": Frequency = 1e6;
    per_second => "/s": Frequency = 1.0;
    per_minute => "/min": Frequency = 1.0 / 60.0;
    per_hour => "/h": Frequency = 1.0 / 3600.0;

    // Molar concentration
    moles_per_cubic_metre => "mol/m3": MolarConcentration = 1.0;
    millimoles_per_cubic_metre => "mmol/m3": MolarConcentration = 1e-3;
    micromoles_per_cubic_metre => "umol/m3": MolarConcentration = 1e-6;
    molar => "M": MolarConcentration = 1e3;
    millimolar => "mM": MolarConcentration = 1.0;
    micromolar => "uM": MolarConcentration = 1e-3;
    nanomolar => "nM": MolarConcentration = 1e-6;
    picomolar => "pM": MolarConcentration = 1e-9;

    // Density
    kilograms_per_cubic_metre => "kg/m3": Density = 1e3;
    grams_per_cubic_metre => "g/m3": Density = 1.0;

    // Angle and probability
    radians => "rad": Angle = 1.0;
    degrees => "deg": Angle = std::f64::consts::PI / 180.0;
    percent => "%": Probability = 1e-2;
}
