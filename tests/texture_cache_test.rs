use std::sync::Arc;

use block_level::{BlockScene, LevelSession, SpriteLoader, TagList, TagRegistry};

use crate::common::test_utils::{CountingLoader, write_level};

mod common;

#[test]
fn repeated_sprite_is_loaded_once_per_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_level(
        dir.path(),
        "bricks",
        "brick 0 0 0 0 0 0 1 1 1\nbrick.png 1 0 0 0 0 0 1 1 1\nbrick 2 0 0 0 0 0 1 1 1\n",
    );
    let loader = CountingLoader::new();
    let mut session = LevelSession::new(config, BlockScene::new(), loader.clone());

    session.load().unwrap();
    assert_eq!(loader.calls("Sprites/brick"), 1);
    assert!(
        session
            .store()
            .iter()
            .all(|b| b.texture.as_deref() == Some("Sprites/brick"))
    );

    // A reload starts with a fresh cache.
    session.load().unwrap();
    assert_eq!(loader.calls("Sprites/brick"), 2);
}

#[test]
fn missing_texture_still_places_block_and_is_looked_up_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_level(
        dir.path(),
        "holes",
        "ghost 0 0 0 0 0 0 1 1 1\nfloor 1 0 0 0 0 0 1 1 1\nghost 2 0 0 0 0 0 1 1 1\n",
    );
    let loader = CountingLoader::new().with_missing("Sprites/ghost");
    let mut session = LevelSession::new(config, BlockScene::new(), loader.clone());

    let report = session.load().unwrap();
    assert_eq!(report.placed(), 3);
    assert_eq!(report.missing_textures, vec!["ghost"]);
    assert_eq!(loader.calls("Sprites/ghost"), 1);
    assert!(session.texture_cache().contains("ghost"));

    let textures: Vec<Option<&str>> = session
        .store()
        .iter()
        .map(|b| b.texture.as_deref())
        .collect();
    assert_eq!(textures, vec![None, Some("Sprites/floor"), None]);
}

#[test]
fn sprite_images_are_resolved_from_resources() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_level(
        dir.path(),
        "painted",
        "stone.png 0 0 0 0 0 0 1 1 1\nmoss 0 1 0 0 0 0 1 1 1\n",
    );
    image::RgbaImage::from_pixel(8, 4, image::Rgba([90, 90, 90, 255]))
        .save(config.sprites_dir().join("stone.png"))
        .unwrap();

    let loader = SpriteLoader::new(config.resources_dir());
    let mut session = LevelSession::new(config, BlockScene::new(), loader);
    let report = session.load().unwrap();
    assert_eq!(report.missing_textures, vec!["moss"]);

    let blocks: Vec<_> = session.store().iter().collect();
    let stone = blocks[0].texture.as_ref().unwrap();
    assert_eq!(stone.dimensions(), (8, 4));
    assert_eq!(stone.label, "stone");
    assert!(blocks[1].texture.is_none());

    // One reference in the cache, one in the placed block.
    assert_eq!(Arc::strong_count(stone), 2);
}

#[test]
fn tag_registry_is_injected() {
    #[derive(Default)]
    struct Recording(Vec<String>);
    impl TagRegistry for Recording {
        fn register_tag(&mut self, tag: &str) {
            if !self.0.iter().any(|t| t == tag) {
                self.0.push(tag.to_string());
            }
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let config = write_level(
        dir.path(),
        "tagged",
        "a 0 0 0 0 0 0 1 1 1\nb 0 0 0 0 0 0 1 1 1\na 0 0 0 0 0 0 1 1 1\n",
    )
    .with_tags(true);
    let mut session = LevelSession::with_registry(
        config,
        BlockScene::new(),
        CountingLoader::new(),
        Recording::default(),
    );
    session.load().unwrap();
    assert_eq!(session.tags().0, vec!["a", "b"]);

    let mut list = TagList::new();
    list.register_tag("a");
    list.register_tag("a");
    assert_eq!(list.tags().len(), 1);
}
