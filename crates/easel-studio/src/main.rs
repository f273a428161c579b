use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::prelude::*;

const FRAMES: usize = 3;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut stage = Stage::new(StageConfig {
        background: Color::rgb(245.0, 245.0, 240.0),
        ..StageConfig::default()
    });
    let measure: Rc<dyn TextMeasure> = Rc::new(MonospaceMeasure::default());

    // ── build the scene ───────────────────────────────────────────────────

    let style = stage.style();
    let mut shapes: Vec<Shape> = Vec::new();

    shapes.push(
        Rectangle::new(
            stage.registry(),
            20.0,
            20.0,
            160.0,
            90.0,
            style.clone().with_fill(Color::hsl(210.0, 60.0, 70.0)).with_border(Color::black()),
        )
        .into(),
    );
    shapes.push(
        Polygon::new(
            stage.registry(),
            [
                Vec2::new(220.0, 20.0),
                Vec2::new(320.0, 20.0),
                Vec2::new(320.0, 120.0),
                Vec2::new(270.0, 70.0),
                Vec2::new(220.0, 120.0),
            ],
            style.clone().with_fill(Color::rgba(200.0, 80.0, 40.0, 0.8)),
        )
        .context("building arrow polygon")?
        .into(),
    );
    shapes.push(
        Line::new(stage.registry(), Vec2::new(20.0, 140.0), Vec2::new(320.0, 140.0), 3.0, Some(Color::named("gray")))
            .into(),
    );
    shapes.push(
        Text::new(stage.registry(), "easel", 170.0, 170.0, 24.0, Some(Color::black()), Rc::clone(&measure)).into(),
    );

    // The ball is animated from the update hook, so it stays outside `shapes`.
    let ball = Rc::new(RefCell::new(Circle::new(
        stage.registry(),
        40.0,
        220.0,
        15.0,
        style.with_fill(Color::named("crimson")),
    )));
    let animated = Rc::clone(&ball);
    stage.on_update(move |time| {
        let mut ball = animated.borrow_mut();
        let x = ball.center_x() + 600.0 * time.dt;
        ball.set_center_x(x);
    });

    // ── run a few frames ──────────────────────────────────────────────────

    let mut frame = DrawList::new();
    for _ in 0..FRAMES {
        let time = stage.tick(&mut frame);
        log::info!(
            "frame {}: {} draw commands, ball at x={:.1}",
            time.frame_index,
            frame.len(),
            ball.borrow().center_x()
        );
    }

    // ── picking ───────────────────────────────────────────────────────────

    for (x, y) in [(100.0, 60.0), (270.0, 100.0), (240.0, 40.0), (5.0, 5.0)] {
        match pick(&shapes, x, y) {
            Some(shape) => log::info!("({x}, {y}) hits {} {}", shape.kind(), shape.id()),
            None => log::info!("({x}, {y}) hits nothing"),
        }
    }

    // ── teardown ──────────────────────────────────────────────────────────

    for shape in shapes {
        shape.dispose(stage.registry())?;
    }
    // Swapping the hook drops its clone of the ball.
    stage.on_update(|_| {});
    Rc::try_unwrap(ball)
        .map_err(|_| anyhow::anyhow!("ball is still shared"))?
        .into_inner()
        .dispose(stage.registry())?;

    stage.tick(&mut frame);
    log::info!("after teardown: {} draw commands", frame.len());

    Ok(())
}
