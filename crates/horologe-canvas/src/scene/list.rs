use crate::coords::Rgba;

use super::{Layer, LayerId, ZIndex};

/// Layered scene presented once per frame.
///
/// Layers are created once at setup time and mutated in place afterwards.
/// Paint order is z ascending (back-to-front), creation order breaking ties;
/// the sorted index buffer is rebuilt lazily and reused across frames.
#[derive(Debug)]
pub struct Scene {
    layers: Vec<Layer>,
    background: Rgba,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            background: Rgba::black(),
            sorted_indices: Vec::new(),
            sorted_dirty: false,
        }
    }

    #[inline]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Sets the clear color used before layers are replayed.
    #[inline]
    pub fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    /// Acquires the named layer, creating it with `z` if it does not exist.
    ///
    /// If a layer with this name already exists it is returned untouched and
    /// `z` is ignored; names identify layers uniquely.
    pub fn create_layer(&mut self, name: impl Into<String>, z: ZIndex) -> LayerId {
        let name = name.into();
        if let Some(i) = self.layers.iter().position(|l| l.name() == name) {
            return LayerId(i);
        }

        self.layers.push(Layer::new(name, z));
        self.sorted_dirty = true;
        LayerId(self.layers.len() - 1)
    }

    #[inline]
    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.0]
    }

    #[inline]
    pub fn layer_mut(&mut self, id: LayerId) -> &mut Layer {
        &mut self.layers[id.0]
    }

    /// Clears a single layer. All other layers are untouched.
    #[inline]
    pub fn clear_layer(&mut self, id: LayerId) {
        self.layers[id.0].clear();
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Iterates layers in paint order (back-to-front) without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &Layer> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.layers[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.layers.len());

        // Stable sort keeps creation order within equal z.
        self.sorted_indices
            .sort_by(|&a, &b| self.layers[a].z().cmp(&self.layers[b].z()));

        self.sorted_dirty = false;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn create_layer_acquires_existing_name() {
        let mut scene = Scene::new();
        let a = scene.create_layer("face", ZIndex::new(0));
        let b = scene.create_layer("face", ZIndex::new(7));
        assert_eq!(a, b);
        assert_eq!(scene.layers().len(), 1);
        assert_eq!(scene.layer(a).z(), ZIndex::new(0));
    }

    #[test]
    fn clearing_one_layer_leaves_others_intact() {
        let mut scene = Scene::new();
        let face = scene.create_layer("face", ZIndex::new(0));
        let hand = scene.create_layer("hand", ZIndex::new(1));

        scene
            .layer_mut(face)
            .push_line(Vec2::zero(), Vec2::new(1.0, 0.0), 1.0, Rgba::white());
        scene
            .layer_mut(hand)
            .push_line(Vec2::zero(), Vec2::new(0.0, 1.0), 1.0, Rgba::white());

        scene.clear_layer(hand);

        assert!(scene.layer(hand).is_empty());
        assert_eq!(scene.layer(face).cmds().len(), 1);
    }

    #[test]
    fn paint_order_is_z_then_creation_order() {
        let mut scene = Scene::new();
        scene.create_layer("top", ZIndex::new(5));
        scene.create_layer("bottom", ZIndex::new(-1));
        scene.create_layer("mid-a", ZIndex::new(2));
        scene.create_layer("mid-b", ZIndex::new(2));

        let order: Vec<&str> = scene.iter_in_paint_order().map(|l| l.name()).collect();
        assert_eq!(order, vec!["bottom", "mid-a", "mid-b", "top"]);
    }

    #[test]
    fn paint_order_is_stable_across_mutation() {
        let mut scene = Scene::new();
        let a = scene.create_layer("a", ZIndex::new(1));
        scene.create_layer("b", ZIndex::new(0));

        scene
            .layer_mut(a)
            .push_line(Vec2::zero(), Vec2::new(1.0, 1.0), 1.0, Rgba::white());
        scene.clear_layer(a);

        let order: Vec<&str> = scene.iter_in_paint_order().map(|l| l.name()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
