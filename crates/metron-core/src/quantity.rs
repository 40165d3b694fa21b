//! Named static dimensions and the quantity aliases built on them.

use crate::unit::Unit;

/// Static dimensions of the named quantities.
///
/// Exponent order is length, time, mass, current, temperature, substance,
/// intensity.
pub mod dims {
    use crate::dim::Dim;
    use crate::int::{N1, N2, N3, P1, P2, P3, Z0};

    /// No dimension.
    pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `m`
    pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `s`
    pub type Time = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    /// `g`
    pub type Mass = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
    /// `A`
    pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
    /// `K`
    pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
    /// `mol`
    pub type Substance = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
    /// `cd`
    pub type Intensity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;
    /// `m2`
    pub type Area = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `m3`
    pub type Volume = Dim<P3, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `m s-1`
    pub type Velocity = Dim<P1, N1, Z0, Z0, Z0, Z0, Z0>;
    /// `m s-2`
    pub type Acceleration = Dim<P1, N2, Z0, Z0, Z0, Z0, Z0>;
    /// `m s-2 g`
    pub type Force = Dim<P1, N2, P1, Z0, Z0, Z0, Z0>;
    /// `m s-1 g`
    pub type Momentum = Dim<P1, N1, P1, Z0, Z0, Z0, Z0>;
    /// `m2 s-2 g`
    pub type Energy = Dim<P2, N2, P1, Z0, Z0, Z0, Z0>;
    /// `m2 s-3 g`
    pub type Power = Dim<P2, N3, P1, Z0, Z0, Z0, Z0>;
    /// `m-1 s-2 g`
    pub type Pressure = Dim<N1, N2, P1, Z0, Z0, Z0, Z0>;
    /// `m-1 s-1 g`
    pub type DynamicViscosity = Dim<N1, N1, P1, Z0, Z0, Z0, Z0>;
    /// `m2 s-1`
    pub type KinematicViscosity = Dim<P2, N1, Z0, Z0, Z0, Z0, Z0>;
    /// `s-1`
    pub type Frequency = Dim<Z0, N1, Z0, Z0, Z0, Z0, Z0>;
    /// `m-3 mol`
    pub type MolarConcentration = Dim<N3, Z0, Z0, Z0, Z0, P1, Z0>;
    /// `m-3 g`
    pub type Density = Dim<N3, Z0, P1, Z0, Z0, Z0, Z0>;
    /// `m3 s-1`
    pub type VolumetricFlow = Dim<P3, N1, Z0, Z0, Z0, Z0, Z0>;
    /// `s-1 mol`
    pub type MolarFlow = Dim<Z0, N1, Z0, Z0, Z0, P1, Z0>;
    /// `s A`
    pub type Charge = Dim<Z0, P1, Z0, P1, Z0, Z0, Z0>;
}

/// A pure number.
pub type Dimensionless = Unit<dims::Dimensionless>;
/// Plane angle in radians; dimensionless.
pub type Angle = Unit<dims::Dimensionless>;
/// Probability in `[0, 1]`; dimensionless.
pub type Probability = Unit<dims::Dimensionless>;
/// Length in metres.
pub type Length = Unit<dims::Length>;
/// Time in seconds.
pub type Time = Unit<dims::Time>;
/// Mass in grams.
pub type Mass = Unit<dims::Mass>;
/// Electric current in amperes.
pub type ElectricCurrent = Unit<dims::Current>;
/// Temperature in kelvin.
pub type Temperature = Unit<dims::Temperature>;
/// Amount of substance in moles.
pub type AmountOfSubstance = Unit<dims::Substance>;
/// Luminous intensity in candela.
pub type LuminousIntensity = Unit<dims::Intensity>;
/// Area in square metres.
pub type Area = Unit<dims::Area>;
/// Volume in cubic metres.
pub type Volume = Unit<dims::Volume>;
/// Velocity in metres per second.
pub type Velocity = Unit<dims::Velocity>;
/// Acceleration in metres per second squared.
pub type Acceleration = Unit<dims::Acceleration>;
/// Force in gram-metres per second squared (1 N = 1000).
pub type Force = Unit<dims::Force>;
/// Momentum in gram-metres per second.
pub type Momentum = Unit<dims::Momentum>;
/// Energy (1 J = 1000).
pub type Energy = Unit<dims::Energy>;
/// Power (1 W = 1000).
pub type Power = Unit<dims::Power>;
/// Pressure (1 Pa = 1000).
pub type Pressure = Unit<dims::Pressure>;
/// Dynamic viscosity (1 Pa s = 1000).
pub type DynamicViscosity = Unit<dims::DynamicViscosity>;
/// Kinematic viscosity in square metres per second.
pub type KinematicViscosity = Unit<dims::KinematicViscosity>;
/// Diffusion coefficient in square metres per second.
pub type Diffusion = Unit<dims::KinematicViscosity>;
/// Frequency in hertz.
pub type Frequency = Unit<dims::Frequency>;
/// Rate of a first-order process, per second.
pub type Rate = Unit<dims::Frequency>;
/// Angular velocity in radians per second.
pub type AngularVelocity = Unit<dims::Frequency>;
/// Molar concentration in moles per cubic metre (1 mM = 1).
pub type MolarConcentration = Unit<dims::MolarConcentration>;
/// Mass density in grams per cubic metre.
pub type Density = Unit<dims::Density>;
/// Volumetric flow in cubic metres per second.
pub type VolumetricFlow = Unit<dims::VolumetricFlow>;
/// Molar flow in moles per second.
pub type MolarFlow = Unit<dims::MolarFlow>;
/// Electric charge in coulombs.
pub type Charge = Unit<dims::Charge>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Exponents;

    #[test]
    fn derived_dimensions_compose() {
        let f: Force = Mass::new(2.0) * Acceleration::new(3.0);
        assert_eq!(f.value(), 6.0);
        let p: Pressure = f / Area::new(2.0);
        assert_eq!(p.value(), 3.0);
        let e: Energy = f * Length::new(2.0);
        let w: Power = e / Time::new(4.0);
        assert_eq!(w.value(), 3.0);
        assert_eq!(Power::EXPONENTS, Exponents::new(2, -3, 1, 0, 0, 0, 0));
    }

    #[test]
    fn concentration_times_volume_is_substance() {
        let n: AmountOfSubstance = MolarConcentration::new(2.0) * Volume::new(0.5);
        assert_eq!(n.value(), 1.0);
    }
}
