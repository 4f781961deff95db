//! Geometric sampling commands.

use tracing::info;
use twister_engine::RandomEngine;
use twister_sampling::{DQuat, DVec3, GeometricSampler};

use super::{log_final_state, render};
use crate::{CliError, Result};

/// Samples `count` points on (or, with `inside`, in) a sphere of `radius`.
pub fn sphere_points(engine: &mut RandomEngine, radius: f64, inside: bool, count: usize) -> Vec<DVec3> {
    let mut sampler = GeometricSampler::new(engine);
    (0..count)
        .map(|_| {
            if inside {
                sampler.point_in_sphere(radius)
            } else {
                sampler.point_on_sphere(radius)
            }
        })
        .collect()
}

/// Samples `count` uniformly distributed rotations.
pub fn quats(engine: &mut RandomEngine, count: usize) -> Vec<DQuat> {
    let mut sampler = GeometricSampler::new(engine);
    (0..count).map(|_| sampler.quat()).collect()
}

/// Run the sphere command
pub fn run_sphere(
    mut engine: RandomEngine,
    radius: f64,
    inside: bool,
    count: usize,
    format: &str,
) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "radius must be finite and non-negative, got {}",
            radius
        )));
    }
    info!(
        "Sampling {} point(s) {} a sphere of radius {}",
        count,
        if inside { "in" } else { "on" },
        radius
    );
    let points = sphere_points(&mut engine, radius, inside, count);
    println!("{}", render(&points, format)?);
    log_final_state(&engine);
    Ok(())
}

/// Run the quat command
pub fn run_quat(mut engine: RandomEngine, count: usize, format: &str) -> Result<()> {
    info!("Sampling {} rotation(s)", count);
    let rotations = quats(&mut engine, count);
    println!("{}", render(&rotations, format)?);
    log_final_state(&engine);
    Ok(())
}

/// Run the shuffle command
pub fn run_shuffle(mut engine: RandomEngine, mut items: Vec<String>) -> Result<()> {
    info!("Shuffling {} item(s)", items.len());
    GeometricSampler::new(&mut engine).shuffle(&mut items);
    println!("{}", items.join(" "));
    log_final_state(&engine);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sphere_surface_points() {
        let mut engine = RandomEngine::new(3);
        let points = sphere_points(&mut engine, 2.0, false, 50);
        for p in &points {
            assert_abs_diff_eq!(p.length(), 2.0, epsilon = 1e-9);
        }
        assert_eq!(engine.current_count(), 100);
    }

    #[test]
    fn test_sphere_inside_points() {
        let mut engine = RandomEngine::new(3);
        let points = sphere_points(&mut engine, 2.0, true, 50);
        assert!(points.iter().all(|p| p.length() <= 2.0 + 1e-9));
        assert_eq!(engine.current_count(), 150);
    }

    #[test]
    fn test_quats_json_fields() {
        let mut engine = RandomEngine::new(8);
        let rotations = quats(&mut engine, 2);
        let json = render(&rotations, "json").unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        // glam serialises quaternions as `[x, y, z, w]`.
        for (value, q) in parsed.iter().zip(&rotations) {
            let w = value[3].as_f64().unwrap();
            assert_abs_diff_eq!(w, q.w, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(run_sphere(RandomEngine::new(1), -1.0, false, 1, "text").is_err());
    }
}
