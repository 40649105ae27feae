use weft::{
    AnchorHandle, Cloth, ClothError, DistanceConstraint, GridConfig, NoOpStepObserver,
    SolverConfig, StepObserver, Vec3,
};

fn hanging(tear: Option<f32>) -> Cloth<Vec3<f32>> {
    let grid = GridConfig::new(4, 4, 1.0, Vec3::new(0.0, 0.0, 0.0));
    let mut solver = SolverConfig::new()
        .with_gravity(Vec3::new(0.0, -9.8, 0.0))
        .with_iterations(4);
    if let Some(tear) = tear {
        solver = solver.with_tear_distance(tear);
    }
    Cloth::new(grid, solver).unwrap()
}

#[test]
fn driven_anchor_follows_driver_without_velocity() {
    let mut cloth = hanging(None);
    let handle = cloth.bind_anchor(cloth.index(0, 3)).unwrap();

    for frame in 1..=30 {
        let target = Vec3::new(frame as f32 * 0.1, 3.0, 0.0);
        cloth.step(1.0 / 60.0, &[target], &mut NoOpStepObserver);

        let p = cloth.particle(cloth.anchors().particle(handle));
        assert_eq!(p.pos, target);
        assert_eq!(p.prev_pos, target);
    }
}

#[test]
fn absent_driver_leaves_anchor_in_place() {
    let mut cloth = hanging(None);
    let left = cloth.bind_anchor(cloth.index(0, 3)).unwrap();
    let right = cloth.bind_anchor(cloth.index(3, 3)).unwrap();
    let right_home = cloth.position_at(3, 3);

    let only_left = |h: AnchorHandle| {
        if h == left { Some(Vec3::new(-1.0, 4.0, 0.0)) } else { None }
    };
    for _ in 0..20 {
        cloth.step(1.0 / 60.0, &only_left, &mut NoOpStepObserver);
    }

    assert_eq!(cloth.position_at(0, 3), Vec3::new(-1.0, 4.0, 0.0));
    assert_eq!(cloth.position_at(3, 3), right_home);
    assert_eq!(cloth.anchors().particle(right), cloth.index(3, 3));
}

#[test]
fn later_binding_on_same_particle_wins() {
    let mut cloth = hanging(None);
    let index = cloth.index(1, 3);
    cloth.bind_anchor(index).unwrap();
    cloth.bind_anchor(index).unwrap();

    let drivers = vec![Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 20.0, 0.0)];
    cloth.step(1.0 / 60.0, &drivers, &mut NoOpStepObserver);

    assert_eq!(cloth.particle(index).pos.y, 20.0);
}

#[test]
fn binding_outside_the_grid_fails() {
    let mut cloth = hanging(None);
    assert_eq!(
        cloth.bind_anchor(16),
        Err(ClothError::ParticleOutOfBounds { index: 16, count: 16 })
    );
    assert_eq!(
        cloth.bind_row(4),
        Err(ClothError::RowOutOfBounds { row: 4, rows: 4 })
    );
    assert!(cloth.anchors().is_empty());
}

#[derive(Default)]
struct TearCount(usize);

impl StepObserver<Vec3<f32>> for TearCount {
    fn on_tear(&mut self, _c: &DistanceConstraint<Vec3<f32>>) {
        self.0 += 1;
    }
}

#[test]
fn yanking_anchors_tears_the_cloth() {
    let mut cloth = hanging(Some(1.5));
    let handles = cloth.bind_row(3).unwrap();
    let before = cloth.constraint_count();

    let mut counter = TearCount::default();
    let mut last = before;
    for frame in 1..=10 {
        let drivers: Vec<_> = handles
            .iter()
            .map(|&h| {
                let home = cloth.particle(cloth.anchors().particle(h)).pos;
                Vec3::new(home.x, 3.0 + frame as f32 * 2.0, home.z)
            })
            .collect();
        cloth.step(1.0 / 60.0, &drivers, &mut counter);
        assert!(cloth.constraint_count() <= last, "torn constraints came back");
        last = cloth.constraint_count();
    }

    assert!(cloth.constraint_count() < before);
    assert_eq!(cloth.torn_count(), before - cloth.constraint_count());
    assert_eq!(counter.0, cloth.torn_count());
}
