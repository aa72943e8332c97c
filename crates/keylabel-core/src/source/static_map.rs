use async_trait::async_trait;

use crate::domain::layout_map::LayoutMap;
use crate::keymap::{us_qwerty_label, PhysicalKey};
use crate::resolver::{KeyboardLayoutSource, LayoutSourceError};

/// A layout source that always answers with the same map.
#[derive(Debug, Clone, Default)]
pub struct StaticLayoutSource {
    map: LayoutMap,
}

impl StaticLayoutSource {
    pub fn new(map: LayoutMap) -> Self {
        Self { map }
    }

    /// A source reporting the US ANSI QWERTY layout for every writing-system
    /// key.
    pub fn us_qwerty() -> Self {
        Self::new(
            PhysicalKey::ALL
                .iter()
                .map(|&key| (key.code(), us_qwerty_label(key)))
                .collect(),
        )
    }

    pub fn map(&self) -> &LayoutMap {
        &self.map
    }
}

#[async_trait]
impl KeyboardLayoutSource for StaticLayoutSource {
    async fn layout_map(&self) -> Result<LayoutMap, LayoutSourceError> {
        Ok(self.map.clone())
    }
}
