use crate::core::units::UnitConverter;
use crate::domain::material::Material;
use crate::rigid_body::BodyDef;

/// The four static walls enclosing the display area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Left, Wall::Right, Wall::Top, Wall::Bottom];
}

/// Build the walls for a `width` x `height` display area.
///
/// Each wall is one ratio of margin thick (one simulation unit) and sits just
/// outside the area, so its inner face lies on the area's edge. Side walls
/// reach `height` past each end, top and bottom reach `width` past each end.
pub fn boundary_walls(
    width: u32,
    height: u32,
    units: &UnitConverter,
    material: Material,
) -> [(Wall, BodyDef); 4] {
    let margin = units.to_simulation(units.ratio());
    let w = units.to_simulation(width as f32);
    let h = units.to_simulation(height as f32);

    Wall::ALL.map(|wall| {
        let def = match wall {
            Wall::Left => BodyDef::new_rect(-margin, 0.0, margin, h, material),
            Wall::Right => BodyDef::new_rect(w + margin, 0.0, margin, h, material),
            Wall::Top => BodyDef::new_rect(0.0, -margin, w, margin, material),
            Wall::Bottom => BodyDef::new_rect(0.0, h + margin, w, margin, material),
        };
        (wall, def)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{BodyKind, Shape};

    fn inner_face(wall: Wall, def: &BodyDef) -> f32 {
        let Shape::Box { half_width, half_height } = def.shape else {
            panic!("walls are boxes");
        };
        match wall {
            Wall::Left => def.position.x + half_width,
            Wall::Right => def.position.x - half_width,
            Wall::Top => def.position.y + half_height,
            Wall::Bottom => def.position.y - half_height,
        }
    }

    #[test]
    fn walls_line_the_display_edges() {
        let units = UnitConverter::new(50.0).unwrap();
        let walls = boundary_walls(400, 800, &units, Material::default());

        assert_eq!(walls.len(), 4);
        for (wall, def) in walls.iter() {
            assert_eq!(def.kind, BodyKind::Static);
            let face = inner_face(*wall, def);
            let expected = match wall {
                Wall::Left | Wall::Top => 0.0,
                Wall::Right => 8.0,
                Wall::Bottom => 16.0,
            };
            assert!((face - expected).abs() < 1e-5, "{:?} face at {}", wall, face);
        }
    }

    #[test]
    fn wall_thickness_is_one_unit() {
        let units = UnitConverter::new(3.0).unwrap();
        let walls = boundary_walls(300, 600, &units, Material::default());
        let (_, left) = walls[0];
        assert_eq!(left.shape, Shape::Box { half_width: 1.0, half_height: 200.0 });
    }
}
