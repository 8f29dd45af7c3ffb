//! The demo world: bat animation, camera orbit, and ANSI presentation.

use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use gloam_geom::Vec2;
use gloam_render::{Camera, Sprite};
use gloam_runtime::ColumnPool;
use gloam_world::{Scene, Texture};

use crate::Args;
use crate::ticker::Ticker;

const DEMO_SCENE: &str = include_str!("../assets/demo.toml");

const EMPTY_PIXEL: u8 = b' ';
const SPRITE_TRANSPARENT: u8 = b' ';
const TURN_PER_FRAME: f64 = 0.02;
const BAT_SCALE: Vec2 = Vec2 { x: 0.3, y: 0.15 };
const BAT_SPEED: f64 = 0.03;
const BAT_FLAP_FRAMES: u64 = 6;
const N_BATS: usize = 3;
/// Closest a bat gets to the border walls, in cells.
const ROOM_PADDING: f64 = 0.2;

struct Bat {
    pos: Vec2,
    vel: Vec2,
    frame_0: bool,
    since_flap: u64,
}

pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let scene = match &args.scene {
        Some(path) => Scene::from_path(path)?,
        None => Scene::from_toml_str(DEMO_SCENE)?,
    };
    let board = scene.board.clone();
    log::info!(
        "scene loaded: {}x{} board, {} textures, {} blocks",
        board.width(),
        board.height(),
        scene.textures.len(),
        scene.blocks.len()
    );

    let mut cam = Camera::new(args.fov_x, args.fov_y, args.width, args.height);
    cam.set_empty_pixel(EMPTY_PIXEL);
    let center = Vec2::new(board.width() as f64 / 2.0, board.height() as f64 / 2.0);
    cam.set_position(center);

    let pool = match args.threads {
        0 => None,
        n => Some(ColumnPool::new(n)?),
    };

    let bat_textures = bat_textures(&scene);
    let mut bats = spawn_bats(center);
    let x_range = (1.0 + ROOM_PADDING, board.width() as f64 - 1.0 - ROOM_PADDING);
    let y_range = (1.0 + ROOM_PADDING, board.height() as f64 - 1.0 - ROOM_PADDING);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if !args.headless {
        out.write_all(b"\x1b[2J")?;
    }

    let mut ticker = Ticker::new(Duration::from_millis(args.tick_ms));
    let mut sprites: Vec<Sprite> = Vec::new();
    let mut fps_mark = Instant::now();
    for frame in 0..args.frames {
        ticker.wait();

        match &pool {
            Some(p) => p.render_walls(&mut cam, &board),
            None => cam.draw_all_columns(&board),
        }
        sprites.clear();
        if let Some(frames) = &bat_textures {
            for bat in &bats {
                sprites.push(Sprite {
                    pos: bat.pos,
                    scale: BAT_SCALE,
                    texture: frames[usize::from(!bat.frame_0)].clone(),
                    transparent: Some(SPRITE_TRANSPARENT),
                });
            }
        }
        cam.draw_sprites(&sprites);

        if !args.headless {
            present(&cam, &mut out)?;
        }

        for bat in &mut bats {
            step_bat(bat, x_range, y_range);
        }
        cam.set_facing(cam.facing() + TURN_PER_FRAME);

        if frame % 64 == 63 {
            let elapsed = fps_mark.elapsed().as_secs_f64();
            log::debug!("frame {frame}: {:.1} fps", 64.0 / elapsed);
            fps_mark = Instant::now();
        }
    }
    Ok(())
}

fn bat_textures(scene: &Scene) -> Option<[Arc<Texture>; 2]> {
    match (scene.textures.get("bat0"), scene.textures.get("bat1")) {
        (Some(a), Some(b)) => Some([a.clone(), b.clone()]),
        _ => {
            log::warn!("scene has no bat0/bat1 textures; rendering without sprites");
            None
        }
    }
}

fn spawn_bats(center: Vec2) -> Vec<Bat> {
    (0..N_BATS)
        .map(|i| {
            // Deterministic spread: golden-angle headings instead of rand.
            let heading = i as f64 * 2.399963;
            Bat {
                pos: center + Vec2::from_angle(heading) * 0.8,
                vel: Vec2::from_angle(heading * 1.7 + 1.0) * BAT_SPEED,
                frame_0: i % 2 == 0,
                since_flap: i as u64 % BAT_FLAP_FRAMES,
            }
        })
        .collect()
}

fn step_bat(bat: &mut Bat, (x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) {
    bat.since_flap += 1;
    if bat.since_flap >= BAT_FLAP_FRAMES {
        bat.frame_0 = !bat.frame_0;
        bat.since_flap = 0;
    }
    bat.pos += bat.vel;
    if bat.pos.x < x_min {
        bat.pos.x = x_min;
        bat.vel.x = -bat.vel.x;
    } else if bat.pos.x > x_max {
        bat.pos.x = x_max;
        bat.vel.x = -bat.vel.x;
    }
    if bat.pos.y < y_min {
        bat.pos.y = y_min;
        bat.vel.y = -bat.vel.y;
    } else if bat.pos.y > y_max {
        bat.pos.y = y_max;
        bat.vel.y = -bat.vel.y;
    }
}

fn present(cam: &Camera, out: &mut impl Write) -> io::Result<()> {
    let mut frame = String::with_capacity((cam.width() + 1) * cam.height() + 8);
    frame.push_str("\x1b[H");
    for y in 0..cam.height() {
        for x in 0..cam.width() {
            let p = cam.pixel(x, y).unwrap_or(EMPTY_PIXEL);
            frame.push(if p < 0x20 { ' ' } else { p as char });
        }
        frame.push('\n');
    }
    out.write_all(frame.as_bytes())?;
    out.flush()
}
