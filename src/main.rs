fn main() -> anyhow::Result<()> {
    transcript_viewer::cli::run()
}
