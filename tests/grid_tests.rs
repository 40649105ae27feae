use weft::{Cloth, GridConfig, NoOpStepObserver, SolverConfig, Topology, Vec3};

fn cloth(width: usize, height: usize, topology: Topology) -> Cloth<Vec3<f32>> {
    let grid = GridConfig::new(width, height, 1.0, Vec3::new(0.0, 0.0, 0.0)).with_topology(topology);
    Cloth::new(grid, SolverConfig::new()).unwrap()
}

#[test]
fn structural_constraint_count() {
    for (w, h) in [(1, 1), (1, 4), (4, 1), (2, 2), (5, 3), (10, 7)] {
        let cloth = cloth(w, h, Topology::STRUCTURAL);
        assert_eq!(cloth.particle_count(), w * h);
        assert_eq!(cloth.constraint_count(), w * (h - 1) + h * (w - 1), "{}x{}", w, h);
    }
}

#[test]
fn shear_adds_two_diagonals_per_cell() {
    for (w, h) in [(1, 1), (2, 2), (5, 3), (10, 7)] {
        let cloth = cloth(w, h, Topology::STRUCTURAL_AND_SHEAR);
        let expected = w * (h - 1) + h * (w - 1) + 2 * (w - 1) * (h - 1);
        assert_eq!(cloth.constraint_count(), expected, "{}x{}", w, h);
    }
}

#[test]
fn lattice_positions_follow_origin_and_spacing() {
    let grid = GridConfig::new(4, 3, 0.5f64, Vec3::new(1.0, 2.0, 3.0));
    let cloth = Cloth::new(grid, SolverConfig::new()).unwrap();
    assert_eq!(cloth.index(3, 2), 11);
    assert_eq!(cloth.position_at(3, 2), Vec3::new(2.5, 3.0, 3.0));
    for p in cloth.particles() {
        assert_eq!(p.pos, p.prev_pos);
        assert!(!p.pinned);
    }
}

#[test]
fn negative_spacing_mirrors_the_lattice() {
    let grid = GridConfig::new(3, 3, -0.5f32, Vec3::new(0.0, 0.0, 0.0))
        .with_topology(Topology::STRUCTURAL_AND_SHEAR);
    let cloth = Cloth::new(grid, SolverConfig::new()).unwrap();
    assert_eq!(cloth.particle_count(), 9);
    assert_eq!(cloth.constraint_count(), 20);
    assert_eq!(cloth.position_at(2, 1), Vec3::new(-1.0, -0.5, 0.0));
    for view in cloth.constraints() {
        assert!(view.rest_length > 0.0);
        assert!((view.stretch() - 1.0).abs() < 1e-6);
    }
}

#[test]
#[should_panic(expected = "outside lattice")]
fn position_past_row_end_panics() {
    let cloth = cloth(4, 3, Topology::STRUCTURAL);
    cloth.position_at(4, 0);
}

#[test]
fn anchored_row_holds_while_cloth_drapes() {
    let grid = GridConfig::new(5, 5, 1.0f32, Vec3::new(0.0, 0.0, 0.0));
    let solver = SolverConfig::new()
        .with_gravity(Vec3::new(0.0, -9.81, 0.0))
        .with_iterations(8);
    let mut cloth = Cloth::new(grid, solver).unwrap();

    let top = cloth.height() - 1;
    let top_initial: Vec<_> = (0..cloth.width()).map(|x| cloth.position_at(x, top)).collect();
    let bottom_initial: Vec<_> = (0..cloth.width()).map(|x| cloth.position_at(x, 0)).collect();

    cloth.bind_row(top).unwrap();

    for _ in 0..120 {
        cloth.step(1.0 / 60.0, &(), &mut NoOpStepObserver);
    }

    for x in 0..cloth.width() {
        assert_eq!(cloth.position_at(x, top), top_initial[x], "anchor {} moved", x);
        let pos = cloth.position_at(x, 0);
        assert!(
            pos.y < bottom_initial[x].y,
            "bottom particle {} should have dropped below {}, but y is {}",
            x, bottom_initial[x].y, pos.y,
        );
    }
}

#[test]
fn regeneration_builds_the_same_shape() {
    let grid = GridConfig::new(6, 4, 0.25f32, Vec3::new(0.0, 1.0, 0.0))
        .with_topology(Topology::STRUCTURAL_AND_SHEAR);
    let solver = SolverConfig::new().with_gravity(Vec3::new(0.0, -9.8, 0.0));
    let fresh = Cloth::new(grid.clone(), solver.clone()).unwrap();
    let mut cloth = Cloth::new(grid, solver).unwrap();

    for _ in 0..30 {
        cloth.step(1.0 / 60.0, &(), &mut NoOpStepObserver);
    }
    cloth.regenerate().unwrap();

    assert_eq!(cloth.positions(), fresh.positions());
    let rests: Vec<_> = cloth.constraints().map(|c| (c.a, c.b, c.rest_length)).collect();
    let fresh_rests: Vec<_> = fresh.constraints().map(|c| (c.a, c.b, c.rest_length)).collect();
    assert_eq!(rests, fresh_rests);
}
