use {
    crate::portrait::Portrait,
    anyhow::{ensure, Context as _, Result},
    log::{debug, info},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

#[cfg(test)]
mod tests;

/// 画像の出力先. 実行したディレクトリからの相対パス.
pub const OUTPUT_DIR: &str = "content/images";

/// `dir` と足りない親ディレクトリを作る. すでにあれば何もしない.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    ensure!(dir.is_dir(), "{} is not a directory", dir.display());
    Ok(())
}

/// 4 枚すべてを `out_dir` に生成し, 書き出したパスを生成順に返す.
///
/// どれか 1 枚でも失敗したらそこで打ち切ってエラーを返す.
pub fn run(out_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_output_dir(out_dir)?;
    info!("generating portraits into {}", out_dir.display());

    let mut written = Vec::with_capacity(Portrait::ALL.len());
    for &portrait in Portrait::ALL.iter() {
        let path = portrait
            .generate(out_dir)
            .with_context(|| format!("failed to generate {}", portrait.file_name()))?;
        written.push(path);
    }

    debug!("all {} portraits generated", written.len());
    Ok(written)
}
