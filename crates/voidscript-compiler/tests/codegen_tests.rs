/// Integration tests for code generation

use voidscript_compiler::{translate, Compiler, CompileError, CompileOptions, DESCRIPTOR_FILE};

/// Helper to compile a VoidScript source string through the file-based driver
fn compile_source(source: &str) -> Result<String, String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let test_file = dir.path().join("main.void");
    std::fs::write(&test_file, source).map_err(|e| e.to_string())?;

    let options = CompileOptions::new(&test_file);
    let compiler = Compiler::new(options);
    let output = compiler.compile().map_err(|e| e.to_string())?;

    Ok(output.java)
}

#[test]
fn test_greeter_broadcast() {
    let source = r#"#info
name: "Greeter"
print("hi")
"#;

    let java = compile_source(source).expect("compilation failed");
    assert!(java.starts_with("public class Greeter extends JavaPlugin {\n"));
    assert!(java.contains("getLogger().info(\"Greeter Enabled\");"));
    assert!(java.contains("        main();\n"));
    assert!(java.contains(
        "    for (Player p : Bukkit.getOnlinePlayers()) {\n        p.sendMessage(\"hi\");\n    }\n"
    ));
    assert_eq!(java.matches("getOnlinePlayers").count(), 1);
    assert!(java.ends_with("}\n"));
}

#[test]
fn test_full_output_shape() {
    let source = "#info\nname: \"Greeter\"\nprint(\"hi\")\n";
    let java = translate(source).unwrap();
    let expected = "\
public class Greeter extends JavaPlugin {
    @Override
    public void onEnable() {
        getLogger().info(\"Greeter Enabled\");
        main();
    }

    // #info
    name: \"Greeter\"
    for (Player p : Bukkit.getOnlinePlayers()) {
        p.sendMessage(\"hi\");
    }
}
";
    assert_eq!(java, expected);
}

#[test]
fn test_unnamed_plugin() {
    let java = translate("print(\"hi\")").unwrap();
    assert!(java.starts_with("public class UnnamedPlugin extends JavaPlugin {"));
    assert!(java.contains("getLogger().info(\"UnnamedPlugin Enabled\");"));
}

#[test]
fn test_function_stub() {
    let java = translate("func [String s](greet):").unwrap();
    assert!(java.contains(
        "    public void greet(String s) {\n        // Function logic here\n        return;\n    }\n"
    ));
}

#[test]
fn test_event_hook() {
    let java = translate("def on_player_join(PlayerJoinEvent event):").unwrap();
    assert!(java.contains("public void onPlayer_join(PlayerJoinEvent event) {"));
}

#[test]
fn test_event_hook_titlecases_non_ascii_names() {
    let java = translate("def on_ßtart(E e):\ndef on_ǆump(E e):\ndef on_ΟΔΟΣ(E e):").unwrap();
    assert!(java.contains("public void onSstart(E e) {"));
    assert!(java.contains("public void onǅump(E e) {"));
    assert!(java.contains("public void onΟδος(E e) {"));
}

#[test]
fn test_carriage_return_line_endings() {
    let java = translate("name: \"A\"\rprint(1)\r").unwrap();
    assert!(java.starts_with("public class A extends JavaPlugin {"));
    assert!(java.contains("        p.sendMessage(1);\n"));
}

#[test]
fn test_collection_literal_ignores_identifier() {
    let java = translate("x = [list]").unwrap();
    assert!(java.contains("    List<String> list = new ArrayList<>(); // List initialization\n"));
    assert!(!java.contains("x ="));
}

#[test]
fn test_conditionals_are_not_nested() {
    let java = translate("if [a] = [b]:\ncounter++;\nelif [c]:\nelse:").unwrap();
    let if_pos = java.find("    if (a == b) {\n        // If logic here\n    }\n").unwrap();
    let raw_pos = java.find("    counter++;\n").unwrap();
    let elif_pos = java.find("    else if (c) {").unwrap();
    let else_pos = java.find("    else {\n        // Else logic here\n    }").unwrap();
    assert!(if_pos < raw_pos && raw_pos < elif_pos && elif_pos < else_pos);
}

#[test]
fn test_nested_lines_are_translated_independently() {
    let source = "loop(i):\n    print(i)\n    func [](inner):";
    let java = translate(source).unwrap();
    assert!(java.contains("    while (true) {\n        // Looping logic here\n        // break;\n    }\n"));
    assert!(java.contains("        p.sendMessage(i);\n"));
    assert!(java.contains("    public void inner() {"));
}

#[test]
fn test_dropped_lines_leave_no_trace() {
    let source = "func broken\nloop forever\ndef helper():\nnums = [1, 2]\nprint(\"x\"";
    let java = translate(source).unwrap();
    let empty = translate("").unwrap();
    assert_eq!(java, empty);
}

#[test]
fn test_blank_line_becomes_empty_comment() {
    let java = translate("a();\n\nb();").unwrap();
    assert!(java.contains("    a();\n    // \n    b();\n"));
}

#[test]
fn test_fragment_order_matches_source() {
    let source = "print(1)\nx = [dict]\nfunc [](f):\n# done";
    let java = translate(source).unwrap();
    let positions: Vec<usize> = [
        "p.sendMessage(1);",
        "Map<String, String> dict",
        "public void f()",
        "// # done",
    ]
    .iter()
    .map(|needle| java.find(needle).expect(needle))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_translation_is_deterministic() {
    let source = "name: \"Det\"\nif [x] = [y]:\nprint(x)\nz = [tuple]\n";
    assert_eq!(translate(source).unwrap(), translate(source).unwrap());
    assert_eq!(compile_source(source).unwrap(), translate(source).unwrap());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let compiler = Compiler::new(CompileOptions::new(dir.path().join("absent.void")));
    assert!(matches!(compiler.compile(), Err(CompileError::FileNotFound(_))));
}

#[test]
fn test_run_without_packaging_writes_java_and_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.void");
    std::fs::write(&input, "name: \"Greeter\"\nversion: \"1.2\"\nprint(\"hi\")\n").unwrap();
    let out_dir = dir.path().join("build");

    let options = CompileOptions::new(&input)
        .output_dir(&out_dir)
        .package(false)
        .descriptor(true);
    let artifacts = Compiler::new(options).run().unwrap();

    assert_eq!(artifacts.java_file, out_dir.join("Greeter.java"));
    assert!(artifacts.toolchain.is_none());
    let java = std::fs::read_to_string(&artifacts.java_file).unwrap();
    assert!(java.starts_with("public class Greeter extends JavaPlugin {"));

    let descriptor = std::fs::read_to_string(out_dir.join(DESCRIPTOR_FILE)).unwrap();
    assert!(descriptor.contains("main: Greeter"));
    assert!(descriptor.contains("1.2"));
}

#[test]
fn test_missing_toolchain_is_not_fatal_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.void");
    std::fs::write(&input, "name: \"Greeter\"\n").unwrap();

    let options = CompileOptions::new(&input)
        .output_dir(dir.path())
        .javac("voidc-test-no-such-javac")
        .jar("voidc-test-no-such-jar");
    let artifacts = Compiler::new(options).run().unwrap();

    let report = artifacts.toolchain.expect("packaging should have been attempted");
    assert!(!report.compile.is_success());
    assert!(!report.archive.is_success());
    assert!(artifacts.java_file.exists());
}

#[test]
fn test_strict_mode_reports_toolchain_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.void");
    std::fs::write(&input, "name: \"Greeter\"\n").unwrap();

    let options = CompileOptions::new(&input)
        .output_dir(dir.path())
        .javac("voidc-test-no-such-javac")
        .jar("voidc-test-no-such-jar")
        .strict(true);
    let err = Compiler::new(options).run().unwrap_err();
    assert!(matches!(err, CompileError::Toolchain { .. }));
    assert!(dir.path().join("Greeter.java").exists());
}
