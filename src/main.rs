fn main() -> anyhow::Result<()> {
    record_explorer::cli::run()
}
