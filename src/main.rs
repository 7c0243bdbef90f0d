use {
    anyhow::Result,
    log::info,
    mbti_portraits::batch::{self, OUTPUT_DIR},
    std::path::Path,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("generating MBTI character illustrations...");
    batch::run(Path::new(OUTPUT_DIR))?;
    info!("all images generated successfully");
    Ok(())
}
