use crate::paint::{Color, Style, StyleDefaults};
use crate::scene::{ShapeRegistry, Surface};
use crate::time::{FrameClock, FrameTime};

/// Update hook run at the start of every tick.
pub type UpdateFn = Box<dyn FnMut(&FrameTime)>;

/// Stage configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    /// Color the surface is cleared to before each frame.
    pub background: Color,
    /// Defaults for [`Stage::style`].
    pub style: StyleDefaults,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            background: Color::white(),
            style: StyleDefaults::default(),
        }
    }
}

/// Headless frame driver.
///
/// Owns the [`ShapeRegistry`] of one scene. The host calls [`tick`] once per
/// animation frame (nominally 60 Hz) with whatever surface it draws to.
///
/// [`tick`]: Stage::tick
pub struct Stage {
    registry: ShapeRegistry,
    config: StageConfig,
    clock: FrameClock,
    on_update: Option<UpdateFn>,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        Self {
            registry: ShapeRegistry::new(),
            config,
            clock: FrameClock::new(),
            on_update: None,
        }
    }

    /// Registry to hand to primitive constructors and `dispose`.
    #[inline]
    pub fn registry(&mut self) -> &mut ShapeRegistry {
        &mut self.registry
    }

    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// A fresh style from the configured defaults.
    #[inline]
    pub fn style(&self) -> Style {
        self.config.style.style()
    }

    #[inline]
    pub fn background(&self) -> &Color {
        &self.config.background
    }

    /// Takes effect on the next tick.
    pub fn set_background(&mut self, background: Color) {
        log::debug!("background -> {background}");
        self.config.background = background;
    }

    /// Replaces the update hook. It runs before drawing on every tick.
    pub fn on_update<F>(&mut self, update: F)
    where
        F: FnMut(&FrameTime) + 'static,
    {
        self.on_update = Some(Box::new(update));
    }

    /// Runs one frame: update hook, clear, then every live draw callback.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> FrameTime {
        let time = self.clock.tick();

        if let Some(update) = self.on_update.as_mut() {
            update(&time);
        }

        surface.clear(&self.config.background);
        self.registry.draw_all(surface);

        log::trace!(
            "frame {} drawn ({} live shapes, dt {:.4}s)",
            time.frame_index,
            self.registry.live_count(),
            time.dt
        );
        time
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("frame_index", &self.clock.frame_index())
            .field("has_update", &self.on_update.is_some())
            .finish()
    }
}
