use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` as a Graphviz digraph.
///
/// Nodes are keyed by their interval, so duplicate intervals collapse into a
/// single vertex in the rendered graph.
pub(crate) fn print_dot<R>(n: Option<&Node<R>>) -> String
where
    R: Display,
{
    let mut buf = String::new();

    buf.push_str("digraph {\n");
    buf.push_str("bgcolor = \"transparent\";\n");
    buf.push_str(
        "node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];\n",
    );
    if let Some(n) = n {
        // Writing to a String cannot fail.
        let _ = recurse(n, &mut buf);
    }
    buf.push_str("}\n");

    buf
}

fn recurse<R, W>(n: &Node<R>, buf: &mut W) -> std::fmt::Result
where
    W: Write,
    R: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | {{ max={} | h={} }}"];"#,
        n.interval(),
        n.interval(),
        n.subtree_max(),
        n.height(),
    )?;

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.interval(),
                    v.interval()
                )?;
                recurse(v, buf)?;
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.interval())?;
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.interval(),
                    n.interval()
                )?;
            }
        };
    }

    Ok(())
}
