use density_fluid::params::FluidParams;
use density_fluid::{DensityClass, ParticleSet};
use eframe::epaint::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Initial layout: dense particles in the top half, light ones below, all at rest.
#[test]
fn initial_partition_holds_across_seeds() -> density_fluid::Result<()> {
    let params = FluidParams::default();
    let half = params.num_particles / 2;

    for seed in [0_u64, 1, 42, 12345] {
        let set = ParticleSet::spawn(&params, &mut StdRng::seed_from_u64(seed))?;
        assert_eq!(set.len(), params.num_particles);

        for (i, p) in set.iter().enumerate() {
            assert_eq!(p.velocity, Vec2::ZERO);
            if i < half {
                assert!(p.position.y < params.height / 2.0, "seed {seed}, particle {i}");
                assert_eq!(p.density, DensityClass::Dense.density());
            } else {
                assert!(p.position.y >= params.height / 2.0, "seed {seed}, particle {i}");
                assert_eq!(p.density, DensityClass::Light.density());
            }
        }
    }
    Ok(())
}

#[test]
fn classes_start_stratified() -> density_fluid::Result<()> {
    let params = FluidParams::default();
    let set = ParticleSet::spawn(&params, &mut StdRng::seed_from_u64(5))?;

    let dense = set.mean_height(DensityClass::Dense).unwrap();
    let light = set.mean_height(DensityClass::Light).unwrap();
    assert!(dense < params.height / 2.0);
    assert!(light >= params.height / 2.0);
    Ok(())
}

#[test]
fn custom_box_is_respected() -> density_fluid::Result<()> {
    let params = FluidParams {
        width: 40.0,
        height: 20.0,
        num_particles: 100,
        ..FluidParams::default()
    };
    let set = ParticleSet::spawn(&params, &mut StdRng::seed_from_u64(11))?;
    for p in set.iter() {
        assert!(p.position.x >= 0.0 && p.position.x < 40.0);
        assert!(p.position.y >= 0.0 && p.position.y < 20.0);
    }
    Ok(())
}
