use arithtree::{
    ast::Expr,
    error::LoadError,
    interpreter::{
        evaluator::core::{Context, DEFAULT_RECURSION_LIMIT, OverflowPolicy, Strategy},
        loader::{load_tree, load_tree_file},
    },
};
use clap::Parser;

/// arithtree evaluates arithmetic expression trees given in their JSON form,
/// e.g. '{"Addition":[{"Number":5},{"Number":4}]}'.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells arithtree to read the tree from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the tree in infix notation before its value.
    #[arg(short, long)]
    print_tree: bool,

    /// Overflow handling: checked, wrapping or saturating.
    #[arg(long, default_value_t = OverflowPolicy::Checked)]
    overflow: OverflowPolicy,

    /// Tree walking strategy: iterative or recursive.
    #[arg(long, default_value_t = Strategy::Iterative)]
    strategy: Strategy,

    /// Deepest tree accepted by the recursive strategy.
    #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,

    contents: String,
}

fn load(args: &Args) -> Result<Expr, LoadError> {
    if args.file {
        load_tree_file(&args.contents)
    } else {
        load_tree(&args.contents)
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let expr = load(&args).unwrap_or_else(|e| {
                              eprintln!("{e}");
                              std::process::exit(1);
                          });
    log::debug!("loaded tree with {} nodes, depth {}", expr.node_count(), expr.depth());

    let context = Context::new().with_overflow(args.overflow)
                                .with_strategy(args.strategy)
                                .with_recursion_limit(args.recursion_limit);
    log::debug!("evaluating with {context:?}");

    if args.print_tree {
        println!("{expr}");
    }

    match context.eval(&expr) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
