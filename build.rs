use quote::{format_ident, quote};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn generate_corpus_tests(testdata_dir: &Path, dest_path: &Path) -> std::io::Result<()> {
    let mut w = fs::File::create(dest_path)?;

    write!(
        w,
        "{}",
        quote! {
            use std::path::PathBuf;
            use pretty_assertions::assert_eq;

            #[derive(serde::Deserialize)]
            struct Case {
                file_name: String,
                #[serde(default)]
                name: Option<String>,
                #[serde(default)]
                version: Option<String>,
            }

            impl Case {
                fn expected(&self) -> Option<crate::NameVersion> {
                    self.name.as_ref().map(|name| crate::NameVersion {
                        name: name.clone(),
                        version: self.version.clone(),
                    })
                }
            }
        }
    )?;

    for entry in fs::read_dir(testdata_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "yaml") {
            // Use the file stem in the test function name
            let stem = path.file_stem().unwrap().to_str().unwrap();
            let file_name = path.file_name().unwrap().to_str().unwrap();
            let fn_name = format_ident!("test_{}_corpus", stem.replace(['.', '-'], "_"));

            let test = quote! {
                #[test]
                fn #fn_name() {
                    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(#file_name);
                    let cases: Vec<Case> = serde_yaml::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
                    for case in cases {
                        assert_eq!(
                            case.expected(),
                            crate::extract_name_version(&case.file_name),
                            "file name {:?}", case.file_name
                        );
                    }
                }
            };

            writeln!(w, "{}", test)?;
        }
    }

    Ok(())
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_corpus_tests(
        Path::new("testdata"),
        &Path::new(&out_dir).join("corpus_tests.rs"),
    )
    .unwrap();
}
