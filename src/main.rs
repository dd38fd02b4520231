use clap::Parser;
use crossbeam_channel::unbounded;
use icongen::{Args, GeneratorConfig, logging, run};
use std::thread;

fn main() {
    logging::init_tracing();
    let config = GeneratorConfig::from(Args::parse());

    // Notices are printed as they arrive, so files already written stay reported
    // even if the worker dies part way.
    let (tx, rx) = unbounded();
    let worker = thread::spawn(move || run(&config, &tx));

    for notice in rx.iter() {
        println!("{notice}");
    }
    if worker.join().is_err() {
        eprintln!("❌ 创建图标失败: generator thread panicked");
    }
}
