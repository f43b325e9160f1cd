//! One handler registry shared by many concurrent conversions

use crate::common::fixture;
use blockmark_babel::{html_to_blocks, serialize_blocks, Destination, HandlerRegistry};
use std::thread;

#[test]
fn test_shared_registry_across_threads() {
    let handlers = HandlerRegistry::with_defaults().unwrap();
    let sources = [fixture("landing.html"), fixture("directives.html")];

    let expected: Vec<String> = sources
        .iter()
        .map(|source| {
            let blocks = html_to_blocks(source, &handlers).unwrap();
            serialize_blocks(&blocks, &handlers, Destination::Content).unwrap()
        })
        .collect();

    let outputs: Vec<(usize, String)> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let handlers = &handlers;
                let source = &sources[worker % sources.len()];
                scope.spawn(move || {
                    let blocks = html_to_blocks(source, handlers).unwrap();
                    let markup =
                        serialize_blocks(&blocks, handlers, Destination::Content).unwrap();
                    (worker % 2, markup)
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });

    for (index, markup) in outputs {
        assert_eq!(markup, expected[index]);
    }
}
