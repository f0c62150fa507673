#[tokio::main]
async fn main() {
    course_builder::run().await;
}
