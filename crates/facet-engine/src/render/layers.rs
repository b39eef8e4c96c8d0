use crate::shading::FragmentVariant;

/// Which visual layers a frame draws.
///
/// Layers are always drawn in `FragmentVariant::ALL` order: silhouette, shaded
/// model, overlay.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LayerSet {
    pub face: bool,
    pub model: bool,
    pub mesh: bool,
}

impl Default for LayerSet {
    fn default() -> Self {
        Self {
            face: true,
            model: true,
            mesh: false,
        }
    }
}

impl LayerSet {
    pub const NONE: Self = Self { face: false, model: false, mesh: false };
    pub const ALL: Self = Self { face: true, model: true, mesh: true };

    /// Only `variant` enabled.
    pub fn only(variant: FragmentVariant) -> Self {
        let mut set = Self::NONE;
        set.set(variant, true);
        set
    }

    pub fn contains(&self, variant: FragmentVariant) -> bool {
        match variant {
            FragmentVariant::Face => self.face,
            FragmentVariant::Model => self.model,
            FragmentVariant::Mesh => self.mesh,
        }
    }

    pub fn set(&mut self, variant: FragmentVariant, enabled: bool) {
        match variant {
            FragmentVariant::Face => self.face = enabled,
            FragmentVariant::Model => self.model = enabled,
            FragmentVariant::Mesh => self.mesh = enabled,
        }
    }

    /// Flips `variant` and returns its new state.
    pub fn toggle(&mut self, variant: FragmentVariant) -> bool {
        let enabled = !self.contains(variant);
        self.set(variant, enabled);
        enabled
    }

    pub fn is_empty(&self) -> bool {
        !(self.face || self.model || self.mesh)
    }

    /// Enabled variants in draw order.
    pub fn iter(self) -> impl Iterator<Item = FragmentVariant> {
        FragmentVariant::ALL.into_iter().filter(move |v| self.contains(*v))
    }
}
