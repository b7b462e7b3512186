use super::run;

#[test]
fn ipv4_block_is_expanded_in_order() -> anyhow::Result<()> {
    let (lines, report) = run("10.0.0.0/30\n", false, false)?;

    assert_eq!(lines, ["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3"]);
    assert_eq!(report.written, 4);
    assert_eq!(report.invalid, 0);
    Ok(())
}

#[test]
fn ipv6_block_is_expanded_in_order() -> anyhow::Result<()> {
    let (lines, _) = run("2001:db8::/126\n", false, false)?;

    assert_eq!(lines, ["2001:db8::", "2001:db8::1", "2001:db8::2", "2001:db8::3"]);
    Ok(())
}

#[test]
fn ipv4_host_with_ipv6_only_prints_nothing() -> anyhow::Result<()> {
    let (lines, report) = run("192.168.1.1\n", false, true)?;

    assert!(lines.is_empty());
    assert_eq!(report.lines, 1);
    assert_eq!(report.invalid, 0);
    Ok(())
}

#[test]
fn bad_line_does_not_stop_the_run() -> anyhow::Result<()> {
    let (lines, report) = run("not-an-ip\n10.0.0.1\n", false, false)?;

    assert_eq!(lines, ["10.0.0.1"]);
    assert_eq!(report.invalid, 1);
    Ok(())
}

#[test]
fn literal_addresses_round_trip() -> anyhow::Result<()> {
    let input = [
        "0.0.0.0",
        "8.8.8.8",
        "::",
        "::1",
        "fe80::1",
        "2001:db8::ff00:42:8329",
        "::ffff:10.0.0.1",
    ];
    let (lines, _) = run(&input.join("\n"), false, false)?;

    assert_eq!(lines, input);
    Ok(())
}

#[test]
fn filters_keep_order_within_each_family() -> anyhow::Result<()> {
    let input = "10.0.0.0/31\n2001:db8::/127\n192.168.0.1\n::1\n::ffff:1.2.3.4\n";

    let (both, _) = run(input, false, false)?;
    let (only4, _) = run(input, true, false)?;
    let (only6, _) = run(input, false, true)?;
    let (explicit_both, _) = run(input, true, true)?;

    assert_eq!(only4, ["10.0.0.0", "10.0.0.1", "192.168.0.1"]);
    assert_eq!(only6, ["2001:db8::", "2001:db8::1", "::1", "::ffff:1.2.3.4"]);
    assert_eq!(both.len(), only4.len() + only6.len());
    assert_eq!(both, explicit_both);
    Ok(())
}

#[test]
fn whitespace_and_blank_lines_are_invalid() -> anyhow::Result<()> {
    let (lines, report) = run(" 10.0.0.1\n10.0.0.2 \n\n\t\n10.0.0.3\n", false, false)?;

    assert_eq!(lines, ["10.0.0.3"]);
    assert_eq!(report.invalid, 4);
    assert_eq!(report.lines, 5);
    Ok(())
}

#[test]
fn out_of_range_prefixes_are_invalid() -> anyhow::Result<()> {
    let (lines, report) = run("10.0.0.0/33\n::/129\n10.0.0.0/32\n::/128\n", false, false)?;

    assert_eq!(lines, ["10.0.0.0", "::"]);
    assert_eq!(report.invalid, 2);
    Ok(())
}

#[test]
fn unaligned_base_starts_at_network_address() -> anyhow::Result<()> {
    let (lines, _) = run("192.168.1.77/29\n", false, false)?;

    assert_eq!(lines.first().map(String::as_str), Some("192.168.1.72"));
    assert_eq!(lines.last().map(String::as_str), Some("192.168.1.79"));
    assert_eq!(lines.len(), 8);
    Ok(())
}

#[test]
fn overlapping_ranges_are_not_deduplicated() -> anyhow::Result<()> {
    let (lines, _) = run("10.0.0.1\n10.0.0.0/31\n", false, false)?;

    assert_eq!(lines, ["10.0.0.1", "10.0.0.0", "10.0.0.1"]);
    Ok(())
}

#[test]
fn large_block_is_streamed_completely() -> anyhow::Result<()> {
    let (lines, report) = run("10.0.0.0/16\n", false, false)?;

    assert_eq!(lines.len(), 65_536);
    assert_eq!(report.written, 65_536);
    assert_eq!(lines[255], "10.0.0.255");
    assert_eq!(lines[256], "10.0.1.0");
    assert_eq!(lines[65_535], "10.0.255.255");
    Ok(())
}

#[test]
fn top_of_address_space_terminates() -> anyhow::Result<()> {
    let input = "255.255.255.0/24\nffff:ffff:ffff:ffff:ffff:ffff:ffff:fffc/126\n";
    let (lines, _) = run(input, false, false)?;

    assert_eq!(lines.len(), 260);
    assert_eq!(lines[255], "255.255.255.255");
    assert_eq!(lines[259], "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
    Ok(())
}

#[test]
fn excluded_family_skips_huge_blocks() -> anyhow::Result<()> {
    // Only finishes because a filtered-out block is never walked.
    let (lines, report) = run("::/0\n10.0.0.1\n", true, false)?;

    assert_eq!(lines, ["10.0.0.1"]);
    assert_eq!(report.written, 1);
    assert_eq!(report.invalid, 0);
    Ok(())
}
