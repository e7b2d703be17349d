// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Bundled example programs.

use miette::Result;

/// A named example program.
pub struct Example {
    /// Short name used to select the example.
    pub slug: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// The program source.
    pub source: &'static str,
}

/// The bundled examples. Keywords are lowercase; the language accepts
/// either case.
pub const EXAMPLES: &[Example] = &[
    Example {
        slug: "hello",
        title: "Hello World",
        source: "10 print h\n20 end\n",
    },
    Example {
        slug: "echo",
        title: "Echo one input",
        source: "10 input a\n20 print a\n30 end\n",
    },
    Example {
        slug: "sum",
        title: "Sum of two numbers",
        source: "10 input a\n\
                 20 input b\n\
                 30 let c = a + b\n\
                 40 print c\n\
                 50 end\n",
    },
    Example {
        slug: "factorial",
        title: "Factorial",
        source: "10 input n\n\
                 20 let f = 1\n\
                 30 let i = 1\n\
                 40 if i > n goto 80\n\
                 50 let f = f * i\n\
                 60 let i = i + 1\n\
                 70 goto 40\n\
                 80 print f\n\
                 90 end\n",
    },
    Example {
        slug: "fibonacci",
        title: "Fibonacci sequence",
        source: "10 input n\n\
                 20 let a = 0\n\
                 30 let b = 1\n\
                 40 let i = 0\n\
                 50 if i >= n goto 120\n\
                 60 print a\n\
                 70 let t = a + b\n\
                 80 let a = b\n\
                 90 let b = t\n\
                 100 let i = i + 1\n\
                 110 goto 50\n\
                 120 end\n",
    },
];

/// List the examples, or print one by name.
pub fn run(name: Option<&str>) -> Result<()> {
    match name {
        None => {
            for example in EXAMPLES {
                println!("{:<12} {}", example.slug, example.title);
            }
            Ok(())
        }
        Some(slug) => {
            let Some(example) = EXAMPLES.iter().find(|e| e.slug == slug) else {
                miette::bail!(
                    "no example named '{slug}'; run `simplebasic examples` to list them"
                );
            };
            print!("{}", example.source);
            Ok(())
        }
    }
}
