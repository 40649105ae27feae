use weft::{Cloth, GridConfig, NoOpStepObserver, Particle, SolverConfig, Vec3};

#[test]
fn integration_at_rest_changes_nothing() {
    let grid = GridConfig::new(6, 6, 0.1f32, Vec3::new(-0.3, 0.0, 2.0));
    let solver = SolverConfig::new().with_damping(0.0);
    let mut cloth = Cloth::new(grid, solver).unwrap();
    let before = cloth.positions();

    cloth.step(1.0 / 60.0, &(), &mut NoOpStepObserver);

    assert_eq!(cloth.positions(), before);
}

#[test]
fn gravity_accumulates_like_verlet() {
    // g * dt^2 = -2, so after n steps the offset is -2 * n(n+1)/2.
    let grid = GridConfig::new(1, 1, 1.0f32, Vec3::new(0.0, 0.0, 0.0));
    let solver = SolverConfig::new()
        .with_gravity(Vec3::new(0.0, -8.0, 0.0))
        .with_damping(0.0);
    let mut cloth = Cloth::new(grid, solver).unwrap();

    for n in 1..=20u32 {
        cloth.step(0.5, &(), &mut NoOpStepObserver);
        let expected = -((n * (n + 1)) as f32);
        let y = cloth.particle(0).pos.y;
        assert!((y - expected).abs() < 1e-3, "step {}: y = {}, expected {}", n, y, expected);
    }
}

#[test]
fn free_fall_approaches_closed_form() {
    let mut p: Particle<Vec3<f64>> = Particle::new(Vec3::new(0.0, 100.0, 0.0));
    let g = Vec3::new(0.0, -9.81, 0.0);
    let dt = 1.0 / 600.0;

    for _ in 0..600 {
        p.integrate(dt, g, 0.0);
    }

    let expected_y = 100.0 - 0.5 * 9.81;
    assert!((p.pos.y - expected_y).abs() < 0.05, "pos.y = {}, expected ~ {}", p.pos.y, expected_y);
}

#[test]
fn first_step_starts_from_rest() {
    let mut p: Particle<Vec3<f32>> = Particle::new(Vec3::new(1.0, 1.0, 1.0));
    p.integrate(0.5, Vec3::new(0.0, -4.0, 0.0), 0.3);
    assert_eq!(p.pos, Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(p.prev_pos, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn damping_scales_carried_displacement() {
    let mut p: Particle<Vec3<f32>> = Particle::new(Vec3::new(0.0, 0.0, 0.0));
    p.prev_pos = Vec3::new(-2.0, 0.0, 0.0);
    p.integrate(1.0, Vec3::new(0.0, 0.0, 0.0), 0.25);
    assert!((p.pos.x - 1.5).abs() < 1e-6);
}

#[test]
fn pinned_particles_ignore_gravity_and_pull() {
    let grid = GridConfig::new(4, 4, 1.0f32, Vec3::new(0.0, 0.0, 0.0));
    let solver = SolverConfig::new()
        .with_gravity(Vec3::new(0.0, -9.81, 0.0))
        .with_iterations(6);
    let mut cloth = Cloth::new(grid, solver).unwrap();
    for index in [0, 5, 15] {
        cloth.set_pinned(index, true).unwrap();
    }
    let pinned_before: Vec<_> = [0, 5, 15].iter().map(|&i| cloth.particle(i).pos).collect();

    for _ in 0..50 {
        cloth.step(1.0 / 60.0, &(), &mut NoOpStepObserver);
    }

    for (k, &i) in [0, 5, 15].iter().enumerate() {
        assert_eq!(cloth.particle(i).pos, pinned_before[k], "pinned particle {} moved", i);
    }
    assert!(cloth.particle(12).pos.y < 3.0);
}
