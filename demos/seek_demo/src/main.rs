use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use twinseek_core::*;
use twinseek_render::SoftwareBackend;
use twinseek_ui::*;

/// Drags a seek bar through a scripted gesture and writes each frame as PNG.
#[derive(Parser, Debug)]
struct Args {
    /// Directory holding seekbar_no_check.png, seekbar_check.png and seekbar_bg.png.
    /// Solid-color placeholders are used when omitted.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Optional JSON style (min, max, asset names).
    #[arg(long)]
    style: Option<PathBuf>,

    /// Where frames are written.
    #[arg(long, default_value = "frames")]
    out: PathBuf,
}

fn placeholder_assets() -> SeekBarAssets {
    let thumb = Bitmap::solid(24, 24, Color::from_hex("#F5F5F5"));
    SeekBarAssets::new(
        Bitmap::solid(240, 12, Color::from_hex("#3A3A3A")),
        Bitmap::solid(240, 12, Color::from_hex("#4F8EF7")),
        thumb.clone(),
        thumb,
    )
}

fn build_bar(args: &Args) -> anyhow::Result<RangeSeekBar> {
    let style = match &args.style {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading style {}", path.display()))?;
            SeekBarStyle::from_json_str(&text)?
        }
        None => SeekBarStyle::default(),
    };

    let bar = match &args.assets {
        Some(dir) => RangeSeekBar::from_source(&DirSource::new(dir), &style)
            .with_context(|| format!("loading seek bar assets from {}", dir.display()))?,
        None => {
            log::info!("no --assets given, using placeholders");
            RangeSeekBar::new(placeholder_assets()).with_range(style.min, style.max)
        }
    };

    Ok(bar
        .on_progress_change(|lo, hi| log::info!("progress {lo}..{hi}"))
        .on_track_start(|| log::info!("track start"))
        .on_track_stop(|| log::info!("track stop")))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut bar = build_bar(&args)?;
    let size = bar.measure();
    log::info!("measured {}x{}", size.width, size.height);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let mut backend = SoftwareBackend::new(size.width as u32, size.height as u32);
    let cy = size.height / 2.0;
    let gesture = [
        PointerEvent::touch_down(size.width * 0.3, cy),
        PointerEvent::touch_move(size.width * 0.4, cy),
        PointerEvent::touch_move(size.width * 0.6, cy),
        PointerEvent::touch_up(size.width * 0.7, cy),
        // off the widget: handed back to the host
        PointerEvent::touch_move(size.width + 10.0, cy),
    ];

    bar.handle().set_max_progress((bar.max() * 0.9) as i32);

    let mut scene = Scene::new(Color::TRANSPARENT);
    let mut frame = 0usize;
    let mut render = |bar: &mut RangeSeekBar, backend: &mut SoftwareBackend| -> anyhow::Result<()> {
        scene.clear();
        bar.paint(&mut scene);
        backend.frame(&scene);
        let path = args.out.join(format!("frame_{frame:02}.png"));
        backend.save_png(&path)?;
        log::debug!("wrote {}", path.display());
        frame += 1;
        Ok(())
    };

    render(&mut bar, &mut backend)?;
    let _ = bar.invalidator().take();
    for pe in &gesture {
        if bar.handle_pointer(pe) == EventResult::Ignored {
            log::info!("event at x={} not handled", pe.position.x);
        }
        if bar.invalidator().take() != Invalidation::empty() {
            render(&mut bar, &mut backend)?;
        }
    }

    println!(
        "selected {}..{} ({} frames in {})",
        bar.min_progress(),
        bar.max_progress(),
        backend.frames_rendered(),
        args.out.display()
    );
    Ok(())
}
