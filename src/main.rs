fn main() {
    mlspec::cli::run();
}
