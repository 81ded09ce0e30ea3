//! Static scene description: a fixed list of records (mesh, transform,
//! surface, tint, specular parameters) consumed by a generic draw loop,
//! plus the two-light setup. The arrangement is a music-room corner:
//! floor, standing lamp, amplifier stack, cat toy rings and a guitar.

use glam::{Mat4, Quat, Vec3};

/// Which primitive mesh an object draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Cube,
    Pyramid,
    Cylinder,
    Cone,
    Sphere,
    Torus,
}

impl MeshKind {
    pub const ALL: [MeshKind; 7] = [
        MeshKind::Plane,
        MeshKind::Cube,
        MeshKind::Pyramid,
        MeshKind::Cylinder,
        MeshKind::Cone,
        MeshKind::Sphere,
        MeshKind::Torus,
    ];
}

/// Which procedural surface pattern an object samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Checker,
    Wood,
    Weave,
    Metal,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 4] = [
        SurfaceKind::Checker,
        SurfaceKind::Wood,
        SurfaceKind::Weave,
        SurfaceKind::Metal,
    ];
}

/// One drawable record in the scene table
#[derive(Debug, Clone, Copy)]
pub struct SceneObject {
    pub mesh: MeshKind,
    pub transform: Mat4,
    /// `None` draws with the tint alone
    pub surface: Option<SurfaceKind>,
    pub tint: [f32; 4],
    pub shininess: f32,
}

/// Two point lights plus the ambient term
#[derive(Debug, Clone, Copy)]
pub struct Lights {
    pub ambient_color: Vec3,
    pub ambient_strength: f32,
    pub light1_position: Vec3,
    pub light1_color: Vec3,
    pub light1_specular: f32,
    pub light2_position: Vec3,
    pub light2_color: Vec3,
    pub light2_specular: f32,
}

pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: Lights,
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

fn srt(scale: Vec3, rotation: Quat, translation: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

fn object(
    mesh: MeshKind,
    transform: Mat4,
    surface: SurfaceKind,
    shininess: f32,
) -> SceneObject {
    SceneObject {
        mesh,
        transform,
        surface: Some(surface),
        tint: WHITE,
        shininess,
    }
}

fn tinted(mesh: MeshKind, transform: Mat4, tint: [f32; 4], shininess: f32) -> SceneObject {
    SceneObject {
        mesh,
        transform,
        surface: None,
        tint,
        shininess,
    }
}

/// Build the fixed scene
pub fn build_scene() -> Scene {
    let no_rotation = Quat::IDENTITY;
    let mut objects = vec![
        // Floor
        object(
            MeshKind::Plane,
            srt(Vec3::new(6.0, 1.0, 6.0), no_rotation, Vec3::ZERO),
            SurfaceKind::Checker,
            16.0,
        ),
        // Standing lamp: base disc, pole, shade hanging over the room
        object(
            MeshKind::Cylinder,
            srt(
                Vec3::new(1.0, 0.2, 1.0),
                no_rotation,
                Vec3::new(-1.5, 0.01, -5.0),
            ),
            SurfaceKind::Metal,
            64.0,
        ),
        object(
            MeshKind::Cylinder,
            srt(
                Vec3::new(0.1, 9.0, 0.1),
                no_rotation,
                Vec3::new(-1.5, 0.01, -5.0),
            ),
            SurfaceKind::Metal,
            64.0,
        ),
        object(
            MeshKind::Cone,
            srt(
                Vec3::splat(1.2),
                Quat::from_rotation_x(180f32.to_radians()),
                Vec3::new(-1.5, 10.0, -5.0),
            ),
            SurfaceKind::Metal,
            32.0,
        ),
        // Amplifier stack: head and cabinet
        object(
            MeshKind::Cube,
            srt(
                Vec3::new(4.0, 2.5, 2.2),
                no_rotation,
                Vec3::new(2.0, 1.27, -4.8),
            ),
            SurfaceKind::Weave,
            8.0,
        ),
        object(
            MeshKind::Cube,
            srt(
                Vec3::new(2.6, 1.8, 1.5),
                no_rotation,
                Vec3::new(3.25, 0.91, -2.8),
            ),
            SurfaceKind::Weave,
            8.0,
        ),
        // Cat scratching post
        object(
            MeshKind::Cylinder,
            srt(
                Vec3::new(0.45, 2.0, 0.45),
                no_rotation,
                Vec3::new(3.5, 0.01, -0.5),
            ),
            SurfaceKind::Wood,
            4.0,
        ),
    ];

    // Cat toy: three stacked rings
    for (ring_scale, height) in [(0.8, 0.15), (0.7, 0.45), (0.6, 0.7)] {
        objects.push(tinted(
            MeshKind::Torus,
            srt(
                Vec3::new(ring_scale, ring_scale, 1.5),
                Quat::from_rotation_x(90f32.to_radians()),
                Vec3::new(0.0, height, 1.0),
            ),
            [0.85, 0.3, 0.25, 1.0],
            8.0,
        ));
    }

    // Guitar leaning against the amp: body, neck, headstock
    objects.push(object(
        MeshKind::Sphere,
        srt(
            Vec3::new(1.0, 0.25, 1.3),
            Quat::from_rotation_z(80f32.to_radians()),
            Vec3::new(-3.1, 1.18, -1.0),
        ),
        SurfaceKind::Wood,
        32.0,
    ));
    objects.push(object(
        MeshKind::Cylinder,
        srt(
            Vec3::new(0.1, 1.5, 0.1),
            Quat::from_axis_angle(
                Vec3::new(0.0, 0.2, 1.0).normalize(),
                80f32.to_radians(),
            ),
            Vec3::new(-2.5, 0.1, -2.0),
        ),
        SurfaceKind::Wood,
        16.0,
    ));
    objects.push(object(
        MeshKind::Cube,
        srt(
            Vec3::new(0.5, 0.7, 0.15),
            Quat::from_rotation_z(80f32.to_radians()),
            Vec3::new(-3.1, 2.2, -1.0),
        ),
        SurfaceKind::Wood,
        16.0,
    ));

    // Pyramid toy by the post
    objects.push(tinted(
        MeshKind::Pyramid,
        srt(Vec3::splat(0.6), no_rotation, Vec3::new(4.6, 0.0, 0.8)),
        [0.25, 0.45, 0.8, 1.0],
        8.0,
    ));

    let lights = Lights {
        ambient_color: Vec3::splat(0.5),
        ambient_strength: 0.8,
        light1_position: Vec3::new(-1.5, 10.0, -5.0),
        light1_color: Vec3::new(0.8, 0.8, 0.3),
        light1_specular: 1.0,
        light2_position: Vec3::new(0.0, 5.0, 3.0),
        light2_color: Vec3::new(0.2, 0.2, 0.2),
        light2_specular: 0.1,
    };

    Scene { objects, lights }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_is_non_empty_and_floor_comes_first() {
        let scene = build_scene();
        assert!(scene.objects.len() >= 10);
        assert_eq!(scene.objects[0].mesh, MeshKind::Plane);
    }

    #[test]
    fn every_mesh_kind_is_used() {
        let scene = build_scene();
        for kind in MeshKind::ALL {
            assert!(
                scene.objects.iter().any(|o| o.mesh == kind),
                "{kind:?} unused"
            );
        }
    }

    #[test]
    fn transforms_are_invertible() {
        let scene = build_scene();
        for object in &scene.objects {
            assert!(object.transform.determinant().abs() > 1e-6);
        }
    }

    #[test]
    fn lights_match_the_fixed_setup() {
        let scene = build_scene();
        assert_eq!(scene.lights.light1_position, Vec3::new(-1.5, 10.0, -5.0));
        assert_eq!(scene.lights.light2_color, Vec3::splat(0.2));
    }
}
