use super::{DrawCmd, ZIndex};

/// Handle to a layer created in a [`Scene`](super::Scene).
///
/// Ids are only handed out by `Scene::create_layer` and stay valid for the
/// scene's lifetime; layers are never removed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LayerId(pub(crate) usize);

/// Named, independently clearable draw-command list.
///
/// A layer has exactly one owner (the static face, or one hand). Clearing it
/// drops only this layer's commands.
#[derive(Debug)]
pub struct Layer {
    name: String,
    z: ZIndex,
    cmds: Vec<DrawCmd>,
}

impl Layer {
    pub(crate) fn new(name: String, z: ZIndex) -> Self {
        Self { name, z, cmds: Vec::new() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn z(&self) -> ZIndex {
        self.z
    }

    /// Drops recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Commands in insertion order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}
