use exptree::ExpressionTree;
use std::{
    fs::File,
    io::{BufRead, BufReader},
};

const SEPARATOR: &str = "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match ExpressionTree::new(line.as_str()) {
            Ok(tree) => print_tree(&tree),
            Err(e) => eprintln!("Unable to build \"{}\": {}", line, e),
        }
    }

    let chain: ExpressionTree =
        "1 + 2 * 3 - 4 / 5 + 6 * 7 - 8 / 9 + 10 * 11".parse()?;
    let different_leaf: ExpressionTree =
        "1 + 2 * 3 - 4 / 5 + 6 * 7 - 8 / 9 + 10 * 111".parse()?;
    let parenthesized: ExpressionTree =
        "(1) + (2) * 3 - 4 / 5 + 6 * 7 - 8 / 9 + (10 * 11)".parse()?;

    compare(&chain, &different_leaf);
    println!("\n");
    compare(&chain, &parenthesized);

    Ok(())
}

fn print_tree(tree: &ExpressionTree) {
    println!("Testing: {}", tree.infix());
    println!("Preorder:{}", tree.prefix_string());
    println!("Inorder:{}", tree.inorder_string());
    println!("Postorder:{}", tree.postfix_string());
    println!("\ntoString method:");
    println!("{}", tree);
    println!("done...");
    println!("\n{}\n", SEPARATOR);
}

fn compare(left: &ExpressionTree, right: &ExpressionTree) {
    println!("{} equals {}?", left.infix(), right.infix());
    println!("{}", left == right);
}
