//! Single-pass line reorderer for Visual Studio solution files.
//!
//! The reorderer classifies each line into structural regions and buffers
//! only the regions whose internal order may vary:
//! - Runs of project blocks (`Project...` up to the `Global` line), sorted
//!   ascending by each block's verbatim first line.
//! - The bodies of the `ProjectConfigurationPlatforms` and `NestedProjects`
//!   global sections, sorted ascending case-insensitively with exact
//!   case-insensitive duplicates collapsed (first occurrence wins).
//!
//! Every other line passes through verbatim in its original position,
//! including unrecognized `GlobalSection(...)` blocks. Marker matching is
//! case-sensitive throughout: `Project`/`Global` by raw line prefix, section
//! openers and `EndGlobalSection` by trimmed-line prefix.

use std::collections::BTreeMap;

use thiserror::Error;

/// Opener of the configuration-platform section (trimmed-prefix match).
pub const CONFIGURATION_PLATFORMS: &str =
    "GlobalSection(ProjectConfigurationPlatforms) = postSolution";

/// Opener of the nested-projects section (trimmed-prefix match).
pub const NESTED_PROJECTS: &str = "GlobalSection(NestedProjects) = preSolution";

const END_GLOBAL_SECTION: &str = "EndGlobalSection";

#[derive(Debug, Error, PartialEq, Eq)]
/// Structural defects that prevent a safe reorder.
///
/// Hitting end-of-input inside an open region means the file is malformed;
/// emitting the buffered region anyway would silently truncate or corrupt
/// the output, so the reorder fails as a whole instead.
pub enum SortError {
    #[error("project declarations are never followed by a Global line")]
    UnterminatedProjectRun,
    #[error("section `{0}` is never closed by EndGlobalSection")]
    UnclosedSection(&'static str),
}

/// Forward-only cursor over the input lines.
///
/// The reorderer consumes the file strictly left to right; no backtracking
/// and no random access, so memory stays bounded to one open region.
struct Cursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(lines: &'a [String]) -> Self {
        Cursor { lines, pos: 0 }
    }

    fn next(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line.as_str())
    }
}

/// Reorder the lines of one solution file.
///
/// Pure transformation: the input is untouched and the result is a fresh
/// sequence, equal in length or shorter (recognized section bodies are
/// deduplicated). Lines outside the reordered regions keep their original
/// relative order and exact text.
pub fn sort_solution(lines: &[String]) -> Result<Vec<String>, SortError> {
    let mut cur = Cursor::new(lines);
    let mut out = Vec::with_capacity(lines.len());

    while let Some(line) = cur.next() {
        if line.starts_with("Project") {
            gather_project_run(line, &mut cur, &mut out)?;
        } else if line.trim().starts_with(CONFIGURATION_PLATFORMS) {
            out.push(line.to_string());
            gather_section_body(CONFIGURATION_PLATFORMS, &mut cur, &mut out)?;
        } else if line.trim().starts_with(NESTED_PROJECTS) {
            out.push(line.to_string());
            gather_section_body(NESTED_PROJECTS, &mut cur, &mut out)?;
        } else {
            out.push(line.to_string());
        }
    }

    Ok(out)
}

/// Gather consecutive project blocks until the `Global` line, then flush
/// them sorted by first line and emit the `Global` line itself.
///
/// Blocks compare by their verbatim first line, byte-wise ascending. The
/// input index breaks ties so two blocks with identical declarations are
/// both kept, in their original relative order.
fn gather_project_run(
    first: &str,
    cur: &mut Cursor,
    out: &mut Vec<String>,
) -> Result<(), SortError> {
    let mut blocks: BTreeMap<(&str, usize), Vec<&str>> = BTreeMap::new();
    let mut block: Vec<&str> = vec![first];
    let mut index = 0usize;

    loop {
        match cur.next() {
            None => return Err(SortError::UnterminatedProjectRun),
            Some(line) if line.starts_with("Project") => {
                let key = block[0];
                blocks.insert((key, index), std::mem::replace(&mut block, vec![line]));
                index += 1;
            }
            Some(line) if line.starts_with("Global") => {
                let key = block[0];
                blocks.insert((key, index), block);
                for lines in blocks.into_values() {
                    out.extend(lines.iter().map(|l| l.to_string()));
                }
                out.push(line.to_string());
                return Ok(());
            }
            Some(line) => block.push(line),
        }
    }
}

/// Gather a recognized section body up to `EndGlobalSection`, then flush it
/// sorted and deduplicated and emit the closing line verbatim.
///
/// The sort key is the Unicode-lowercased line, so lines differing only in
/// case collapse to whichever appeared first. An empty body is legal.
fn gather_section_body(
    section: &'static str,
    cur: &mut Cursor,
    out: &mut Vec<String>,
) -> Result<(), SortError> {
    let mut body: BTreeMap<String, &str> = BTreeMap::new();

    loop {
        match cur.next() {
            None => return Err(SortError::UnclosedSection(section)),
            Some(line) if line.trim().starts_with(END_GLOBAL_SECTION) => {
                out.extend(body.into_values().map(str::to_string));
                out.push(line.to_string());
                return Ok(());
            }
            Some(line) => {
                body.entry(line.to_lowercase()).or_insert(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    const UNSORTED: &str = "\
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 16
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Zeta\", \"Zeta\\Zeta.csproj\", \"{B1}\"
EndProject
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Alpha\", \"Alpha\\Alpha.csproj\", \"{A1}\"
\tProjectSection(ProjectDependencies) = postProject
\t\t{B1} = {B1}
\tEndProjectSection
EndProject
Global
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
\t\t{B1}.Debug|Any CPU.ActiveCfg = Debug|Any CPU
\t\t{A1}.Debug|Any CPU.ActiveCfg = Debug|Any CPU
\tEndGlobalSection
EndGlobal";

    #[test]
    fn test_project_blocks_sort_by_first_line_and_stay_intact() {
        let out = sort_solution(&lines(UNSORTED)).unwrap();
        // Alpha's whole block (with its dependency sub-section) moves ahead
        // of Zeta's; block-internal lines never reorder.
        let alpha = out.iter().position(|l| l.contains("\"Alpha\"")).unwrap();
        let zeta = out.iter().position(|l| l.contains("\"Zeta\"")).unwrap();
        assert!(alpha < zeta);
        assert_eq!(out[alpha + 1], "\tProjectSection(ProjectDependencies) = postProject");
        assert_eq!(out[alpha + 2], "\t\t{B1} = {B1}");
        assert_eq!(out[alpha + 3], "\tEndProjectSection");
        assert_eq!(out[alpha + 4], "EndProject");
        assert_eq!(out[zeta + 1], "EndProject");
    }

    #[test]
    fn test_configuration_body_sorts_between_markers() {
        let out = sort_solution(&lines(UNSORTED)).unwrap();
        let opener = out
            .iter()
            .position(|l| l.trim().starts_with(CONFIGURATION_PLATFORMS))
            .unwrap();
        assert!(out[opener + 1].starts_with("\t\t{A1}"));
        assert!(out[opener + 2].starts_with("\t\t{B1}"));
        assert_eq!(out[opener + 3].trim(), "EndGlobalSection");
    }

    #[test]
    fn test_sorted_file_is_a_fixed_point() {
        let once = sort_solution(&lines(UNSORTED)).unwrap();
        let twice = sort_solution(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pass_through_lines_keep_positions() {
        let out = sort_solution(&lines(UNSORTED)).unwrap();
        assert_eq!(
            out[0],
            "Microsoft Visual Studio Solution File, Format Version 12.00"
        );
        assert_eq!(out[1], "# Visual Studio Version 16");
        assert_eq!(out.last().unwrap(), "EndGlobal");
        assert_eq!(out.len(), lines(UNSORTED).len());
    }

    #[test]
    fn test_nested_projects_body_sorts_case_insensitively() {
        let input = lines(
            "Global
\tGlobalSection(NestedProjects) = preSolution
\t\t{FF} = {22}
\t\t{aa} = {11}
\tEndGlobalSection
EndGlobal",
        );
        let out = sort_solution(&input).unwrap();
        assert_eq!(out[2], "\t\t{aa} = {11}");
        assert_eq!(out[3], "\t\t{FF} = {22}");
    }

    #[test]
    fn test_case_insensitive_duplicates_collapse_first_wins() {
        let input = lines(
            "Global
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
\t\t{A1}.Debug|Any CPU.ActiveCfg = Debug|Any CPU
\t\t{a1}.debug|any cpu.activecfg = debug|any cpu
\tEndGlobalSection
EndGlobal",
        );
        let out = sort_solution(&input).unwrap();
        assert_eq!(out.len(), input.len() - 1);
        assert_eq!(out[2], "\t\t{A1}.Debug|Any CPU.ActiveCfg = Debug|Any CPU");
    }

    #[test]
    fn test_empty_recognized_section_round_trips() {
        let input = lines(
            "Global
\tGlobalSection(NestedProjects) = preSolution
\tEndGlobalSection
EndGlobal",
        );
        assert_eq!(sort_solution(&input).unwrap(), input);
    }

    #[test]
    fn test_unrecognized_sections_pass_through_untouched() {
        let input = lines(
            "Global
\tGlobalSection(SolutionProperties) = preSolution
\t\tHideSolutionNode = FALSE
\t\tAnotherKey = TRUE
\tEndGlobalSection
EndGlobal",
        );
        // Body left exactly as-is even though it is not sorted.
        assert_eq!(sort_solution(&input).unwrap(), input);
    }

    #[test]
    fn test_duplicate_project_declarations_both_survive() {
        let input = lines(
            "Project(\"{G}\") = \"Twin\", \"a\\Twin.csproj\", \"{A1}\"
EndProject
Project(\"{G}\") = \"Twin\", \"a\\Twin.csproj\", \"{A1}\"
\tProjectSection(ProjectDependencies) = postProject
\tEndProjectSection
EndProject
Global
EndGlobal",
        );
        let out = sort_solution(&input).unwrap();
        assert_eq!(out.len(), input.len());
        // Original relative order of the twins is kept.
        assert_eq!(out[0], input[0]);
        assert_eq!(out[1], "EndProject");
        assert_eq!(out[3], "\tProjectSection(ProjectDependencies) = postProject");
    }

    #[test]
    fn test_unterminated_project_run_is_an_error() {
        let input = lines(
            "Project(\"{G}\") = \"Dangling\", \"d\\D.csproj\", \"{D1}\"
EndProject",
        );
        assert_eq!(
            sort_solution(&input),
            Err(SortError::UnterminatedProjectRun)
        );
    }

    #[test]
    fn test_unclosed_section_is_an_error() {
        let input = lines(
            "Global
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
\t\t{A1}.Debug|Any CPU.ActiveCfg = Debug|Any CPU",
        );
        assert_eq!(
            sort_solution(&input),
            Err(SortError::UnclosedSection(CONFIGURATION_PLATFORMS))
        );
    }

    #[test]
    fn test_global_marker_ends_run_even_mid_block() {
        // A block is everything up to the next Project/Global marker; the
        // Global line itself is emitted right after the flushed blocks.
        let input = lines(
            "Project(\"{G}\") = \"Solo\", \"s\\S.csproj\", \"{S1}\"
EndProject
Global
EndGlobal",
        );
        let out = sort_solution(&input).unwrap();
        assert_eq!(out[2], "Global");
        assert_eq!(out[3], "EndGlobal");
    }
}
