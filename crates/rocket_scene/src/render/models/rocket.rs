//! The launch rocket
//!
//! Built along local +X and then stood upright by a quarter turn about Z, so
//! the finished rocket points up +Y with its base near the origin.

use super::composite::{CompositeModel, ModelPart, PrimitiveShape};
use crate::foundation::math::{Quat, Transform, Vec3};
use crate::render::primitives::{Mesh, MeshError};
use std::f32::consts::{FRAC_PI_2, PI};

/// Angular steps used for the rocket's round parts
pub const ROCKET_SUBDIVISIONS: usize = 16;

const HULL_COLOR: [f32; 3] = [0.85, 0.85, 0.85];
const FIN_COLOR: [f32; 3] = [0.75, 0.75, 0.80];
const ENGINE_COLOR: [f32; 3] = [0.20, 0.20, 0.25];

/// Part list for the rocket, in assembly order
///
/// Body, nose cone, four fins a quarter turn apart about +Y, engine bell.
pub fn rocket_model() -> CompositeModel {
    let upright = Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2);
    let round = |capped| PrimitiveShape::Cone { capped, subdivisions: ROCKET_SUBDIVISIONS };

    let body = ModelPart::new(
        "body",
        PrimitiveShape::Cylinder { capped: true, subdivisions: ROCKET_SUBDIVISIONS },
        Vec3::from(HULL_COLOR),
    )
    .with_transform(
        Transform::identity()
            .with_scale(Vec3::new(4.0, 0.5, 0.5))
            .rotated_about_origin(upright),
    );

    let nose = ModelPart::new("nose", round(true), Vec3::from(HULL_COLOR)).with_transform(
        Transform::from_position(Vec3::new(4.0, 0.0, 0.0))
            .with_scale(Vec3::new(1.0, 0.5, 0.5))
            .rotated_about_origin(upright),
    );

    let engine = ModelPart::new("engine", round(true), Vec3::from(ENGINE_COLOR)).with_transform(
        Transform::from_position(Vec3::new(-1.0, 0.0, 0.0))
            .with_scale(Vec3::new(2.0, 0.3, 0.3))
            .rotated_about_origin(upright),
    );

    let mut model = CompositeModel::new("rocket").with_part(body).with_part(nose);

    for (i, turn) in [0.0, FRAC_PI_2, PI, PI * 1.5].into_iter().enumerate() {
        let fin = ModelPart::new(format!("fin_{}", i + 1), PrimitiveShape::Cube, Vec3::from(FIN_COLOR))
            .with_transform(
                Transform::from_position(Vec3::new(1.0, 1.0, 0.0))
                    .with_scale(Vec3::new(0.5, 0.8, 0.05))
                    .rotated_about_origin(Quat::from_axis_angle(&Vec3::y_axis(), turn)),
            );
        model = model.with_part(fin);
    }

    model.with_part(engine)
}

/// Build the rocket as a single flat mesh
pub fn assemble_rocket() -> Result<Mesh, MeshError> {
    rocket_model().assemble()
}
