//! Rod material constants.
//!
//! The rod is always carbon steel. Properties are carried as uom quantities
//! and lowered to SI `Real`s where the scheme coefficients are built.

use crate::numeric::Real;
use crate::units::{Conductivity, Density, SpecificHeat, j_per_kg_k, kg_per_m3, w_per_m_k};

/// Thermophysical properties of a homogeneous rod.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub name: &'static str,
    /// rho
    pub density: Density,
    /// c
    pub specific_heat: SpecificHeat,
    /// lambda
    pub conductivity: Conductivity,
}

impl Material {
    /// Carbon steel: rho = 7800 kg/m^3, c = 460 J/(kg K), lambda = 46 W/(m K).
    pub fn steel() -> Self {
        Self {
            name: "steel",
            density: kg_per_m3(7800.0),
            specific_heat: j_per_kg_k(460.0),
            conductivity: w_per_m_k(46.0),
        }
    }

    /// Volumetric heat capacity rho*c in J/(m^3 K).
    pub fn rho_c(&self) -> Real {
        self.density.value * self.specific_heat.value
    }

    /// Thermal conductivity in W/(m K).
    pub fn lambda(&self) -> Real {
        self.conductivity.value
    }

    /// Thermal diffusivity lambda/(rho*c) in m^2/s.
    pub fn diffusivity(&self) -> Real {
        self.lambda() / self.rho_c()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steel_constants() {
        let steel = Material::steel();
        assert_eq!(steel.rho_c(), 7800.0 * 460.0);
        assert_eq!(steel.lambda(), 46.0);
        assert!((steel.diffusivity() - 46.0 / 3_588_000.0).abs() < 1e-18);
    }
}
