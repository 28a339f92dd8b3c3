//! 打印 GraphQL schema 的 SDL，不需要数据库

fn main() {
    println!("{}", adressbook_graphql::app::sdl());
}
