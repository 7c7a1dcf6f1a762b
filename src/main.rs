fn main() {
    bookshelf::start();
}
