//! Scene lights: a global directional light plus point lights riding on the
//! rocket

use crate::config::{LightingConfig, PointLightConfig};
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Point light resolved to world space for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World position
    pub position: Vec3,
    /// Linear RGB color
    pub color: Vec3,
    /// Whether the light contributes this frame
    pub enabled: bool,
}

/// Light switches and rocket-mounted lights
#[derive(Debug, Clone, PartialEq)]
pub struct RocketLights {
    directional_enabled: bool,
    lights: Vec<PointLightConfig>,
}

impl RocketLights {
    /// Start from the configured switch states
    pub fn new(config: &LightingConfig) -> Self {
        Self {
            directional_enabled: config.directional_enabled,
            lights: config.point_lights.clone(),
        }
    }

    /// Whether the global directional light is on
    pub fn directional_enabled(&self) -> bool {
        self.directional_enabled
    }

    /// Number of rocket-mounted lights
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// True when the rocket carries no lights
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Flip the global directional light
    pub fn toggle_directional(&mut self) {
        self.directional_enabled = !self.directional_enabled;
        log::debug!("Directional light: {}", self.directional_enabled);
    }

    /// Flip one point light, returning its new state
    ///
    /// Returns `None` for an index past the last light.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let light = self.lights.get_mut(index)?;
        light.enabled = !light.enabled;
        log::debug!("Point light {}: {}", index, light.enabled);
        Some(light.enabled)
    }

    /// Point lights placed by the rocket's model matrix
    pub fn lights_at(&self, model: Mat4) -> impl Iterator<Item = PointLight> + '_ {
        self.lights.iter().map(move |light| PointLight {
            position: model.transform_homogeneous(&Vec3::from(light.offset)).xyz(),
            color: Vec3::from(light.color),
            enabled: light.enabled,
        })
    }
}

impl Default for RocketLights {
    fn default() -> Self {
        Self::new(&LightingConfig::default())
    }
}
