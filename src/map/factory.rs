//! Factory for creating map backends.

use log::debug;

use crate::error::Result;
use crate::map::bst::BstMap;
use crate::map::config::MapConfig;
use crate::map::hash::ChainedHashMap;
use crate::map::red_black::RedBlackMap;
use crate::map::traits::WordMap;

/// Factory for creating map instances.
///
/// Client code only sees a `Box<dyn WordMap>`; the concrete backend is
/// determined by the config variant.
///
/// # Example
///
/// ```
/// use word_replacer::map::{MapConfig, MapFactory, MapKind};
///
/// # fn main() -> word_replacer::error::Result<()> {
/// let kind = MapKind::parse_str("RBT")?;
/// let mut map = MapFactory::create(MapConfig::from_kind(kind))?;
///
/// map.put("cat".to_string(), "dog".to_string());
/// assert_eq!(map.get("cat"), Some("dog"));
/// assert_eq!(map.name(), "rbt");
/// # Ok(())
/// # }
/// ```
pub struct MapFactory;

impl MapFactory {
    /// Create an empty map for the given configuration.
    pub fn create(config: MapConfig) -> Result<Box<dyn WordMap>> {
        let map: Box<dyn WordMap> = match config {
            MapConfig::Bst => Box::new(BstMap::<String, String>::new()),
            MapConfig::Rbt => Box::new(RedBlackMap::<String, String>::new()),
            MapConfig::Hash(hash_config) => {
                Box::new(ChainedHashMap::<String, String>::from_config(&hash_config)?)
            }
        };
        debug!("created empty {} map", map.name());
        Ok(map)
    }
}
