//! Integration tests for setup-cfg-fmt
//!
//! These tests verify:
//! - Full rewrites of setup.cfg files on disk
//! - Readme, license and tox.ini discovery next to the file
//! - python_requires resolution and classifier generation
//! - Multi-file runs through the orchestrator

use setup_cfg_fmt::domain::Version;
use setup_cfg_fmt::format::{FormatOptions, Formatter};
use setup_cfg_fmt::orchestrator::Orchestrator;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn write_setup_cfg(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("setup.cfg");
    fs::write(&path, content).unwrap();
    path
}

fn v(s: &str) -> Version {
    s.parse().unwrap()
}

/// Formats `content` as `setup.cfg` inside `dir`, returning whether the file
/// changed and its new content
fn run_format(dir: &Path, content: &str, options: FormatOptions) -> (bool, String) {
    let path = write_setup_cfg(dir, content);
    let report = Formatter::new(options).format_file(&path).unwrap();
    (report.changed(), fs::read_to_string(&path).unwrap())
}

fn rewrite(content: &str) -> (bool, String) {
    let temp_dir = create_test_dir();
    run_format(temp_dir.path(), content, FormatOptions::new())
}

const MIT_LICENSE: &str = "\
Copyright (c) 2019 Jane Doe

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

const COMMONS_CLAUSE: &str = "\

\"Commons Clause\" License Condition v1.0

The Software is provided to you by the Licensor under the License, as defined
below, subject to the following condition.

Without limiting other conditions in the License, the grant of rights under
the License will not include, and the License does not grant to you, the right
to Sell the Software.

For purposes of the foregoing, \"Sell\" means practicing any or all of the
rights granted to you under the License to provide to third parties, for a fee
or other consideration (including without limitation fees for hosting or
consulting/ support services related to the Software), a product or service
whose value derives, entirely or substantially, from the functionality of the
Software. Any license notice or attribution required by the License must also
include this Commons Clause License Condition notice.

Software: pkg
License: MIT
Licensor: Jane Doe
";

const ZLIB_LICENSE: &str = "\
zlib License

(C) 2019 Jane Doe

This software is provided 'as-is', without any express or implied
warranty.  In no event will the authors be held liable for any damages
arising from the use of this software.

Permission is granted to anyone to use this software for any purpose,
including commercial applications, and to alter it and redistribute it
freely, subject to the following restrictions:

1. The origin of this software must not be misrepresented; you must not
   claim that you wrote the original software. If you use this software
   in a product, an acknowledgment in the product documentation would be
   appreciated but is not required.
2. Altered source versions must be plainly marked as such, and must not be
   misrepresented as being the original software.
3. This notice may not be removed or altered from any source distribution.
";

mod rewrite_layout {
    use super::*;

    #[test]
    fn test_noop() {
        let input = "[metadata]\nname = pkg\nversion = 1.0\n";
        let (changed, output) = rewrite(input);

        assert!(!changed);
        assert_eq!(output, input);
    }

    #[test]
    fn test_orders_sections() {
        let input = "\
[bdist_wheel]
universal = true

[options]
packages = find:

[metadata]
name = pkg
version = 1.0
";
        let (changed, output) = rewrite(input);

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg
version = 1.0

[options]
packages = find:

[bdist_wheel]
universal = true
"
        );
    }

    #[test]
    fn test_orders_authors_and_maintainers() {
        let input = "\
[metadata]
maintainer_email = jane@example.com
maintainer = jane
license = foo
name = pkg
author_email = john@example.com
author = john
";
        let (_, output) = rewrite(input);

        assert_eq!(
            output,
            "\
[metadata]
name = pkg
author = john
author_email = john@example.com
maintainer = jane
maintainer_email = jane@example.com
license = foo
"
        );
    }

    #[test]
    fn test_normalizes_dashes_in_keys() {
        let input = "\
[metadata]
name = pkg
author-email = john@example.com
maintainer-email = jane@example.com
";
        let (_, output) = rewrite(input);

        assert_eq!(
            output,
            "\
[metadata]
name = pkg
author_email = john@example.com
maintainer_email = jane@example.com
"
        );
    }

    #[test]
    fn test_normalizes_name_dashes() {
        let (changed, output) = rewrite("[metadata]\nname = my-pkg\n");

        assert!(changed);
        assert_eq!(output, "[metadata]\nname = my_pkg\n");
    }

    #[test]
    fn test_packages_find_keys_ordered() {
        let input = "\
[metadata]
name = pkg

[options.packages.find]
include = pkg*
exclude = tests*
where = src
";
        let (_, output) = rewrite(input);

        assert_eq!(
            output,
            "\
[metadata]
name = pkg

[options.packages.find]
where = src
exclude = tests*
include = pkg*
"
        );
    }

    #[test]
    fn test_unknown_sections_keep_key_spelling() {
        let input = "\
[metadata]
name = pkg

[flake8]
max-line-length = 100
";
        let (changed, output) = rewrite(input);

        assert!(!changed);
        assert_eq!(output, input);
    }

    #[test]
    fn test_strips_only_empty_options() {
        let input = "\
[metadata]
name = pkg
version = 1.0

[options]
dependency_links =
py_modules = pkg
";
        let (changed, output) = rewrite(input);

        assert!(changed);
        assert_eq!(
            output,
            "[metadata]\nname = pkg\nversion = 1.0\n\n[options]\npy_modules = pkg\n"
        );
    }

    #[test]
    fn test_strips_section_left_empty() {
        let input = "\
[metadata]
name = pkg
version = 1.0

[options]
dependency_links =
";
        let (changed, output) = rewrite(input);

        assert!(changed);
        assert_eq!(output, "[metadata]\nname = pkg\nversion = 1.0\n");
    }

    #[test]
    fn test_second_run_is_noop() {
        let temp_dir = create_test_dir();
        let input = "\
[options]
install_requires =
    six >= 1
    attrs
python_requires = >=3.7

[metadata]
version = 1.0
name = my-pkg
";
        let (changed, first) = run_format(temp_dir.path(), input, FormatOptions::new());
        assert!(changed);

        let (changed, second) = run_format(temp_dir.path(), &first, FormatOptions::new());
        assert!(!changed);
        assert_eq!(first, second);
    }
}

mod requirements {
    use super::*;

    #[test]
    fn test_install_requires_normalized_and_sorted() {
        let input = "\
[metadata]
name = pkg
version = 1.0

[options]
install_requires =
    req03;python_version<\"3.7\"
    req05 <= 2,!=1
    req_req
    req04 >= 1
    req01
";
        let (changed, output) = rewrite(input);

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg
version = 1.0

[options]
install_requires =
    req-req
    req01
    req04>=1
    req05!=1,<=2
    req03;python_version<\"3.7\"
"
        );
    }

    #[test]
    fn test_single_requirement_becomes_block() {
        let input = "\
[metadata]
name = pkg

[options]
setup_requires = setuptools >= 40
";
        let (_, output) = rewrite(input);

        assert_eq!(
            output,
            "\
[metadata]
name = pkg

[options]
setup_requires =
    setuptools>=40
"
        );
    }

    #[test]
    fn test_extras_normalized() {
        let input = "\
[metadata]
name = pkg

[options.extras_require]
testing = pytest >= 6
dev =
    tox
    black==22.1
";
        let (changed, output) = rewrite(input);

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg

[options.extras_require]
dev =
    black==22.1
    tox
testing =
    pytest>=6
"
        );
    }
}

mod readme_discovery {
    use super::*;

    fn readme_result(dir: &Path) -> String {
        let (changed, output) = run_format(
            dir,
            "[metadata]\nname = pkg\nversion = 1.0\n",
            FormatOptions::new(),
        );
        assert!(changed);
        output
    }

    fn expected(filename: &str, content_type: &str) -> String {
        format!(
            "[metadata]\nname = pkg\nversion = 1.0\nlong_description = file: {}\nlong_description_content_type = {}\n",
            filename, content_type
        )
    }

    #[test]
    fn test_content_types() {
        let cases = [
            ("README.rst", "text/x-rst"),
            ("README.markdown", "text/markdown"),
            ("README.md", "text/markdown"),
            ("README", "text/plain"),
            ("readme.txt", "text/plain"),
        ];

        for (filename, content_type) in cases {
            let temp_dir = create_test_dir();
            fs::write(temp_dir.path().join(filename), "my project!").unwrap();

            assert_eq!(
                readme_result(temp_dir.path()),
                expected(filename, content_type),
                "readme {}",
                filename
            );
        }
    }

    #[test]
    fn test_asciidoc_not_preferred() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("README.md"), "my project!").unwrap();
        fs::write(temp_dir.path().join("README.adoc"), "my project!").unwrap();
        fs::write(temp_dir.path().join("README.asciidoc"), "my project!").unwrap();

        assert_eq!(
            readme_result(temp_dir.path()),
            expected("README.md", "text/markdown")
        );
    }

    #[test]
    fn test_asciidoc_used_when_alone() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("README.adoc"), "my project!").unwrap();

        assert_eq!(
            readme_result(temp_dir.path()),
            expected("README.adoc", "text/plain")
        );
    }

    #[test]
    fn test_prefers_file_over_directory() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("README")).unwrap();
        fs::write(temp_dir.path().join("README.md"), "my project!").unwrap();

        assert_eq!(
            readme_result(temp_dir.path()),
            expected("README.md", "text/markdown")
        );
    }
}

mod license_discovery {
    use super::*;

    #[test]
    fn test_sets_license_files_for_unknown_license() {
        for filename in ["LICENSE", "LICENCE", "LICENSE.md", "license.txt"] {
            let temp_dir = create_test_dir();
            fs::write(temp_dir.path().join(filename), "COPYRIGHT (C) 2019 ME").unwrap();

            let (changed, output) = run_format(
                temp_dir.path(),
                "[metadata]\nname = pkg\nversion = 1.0\n",
                FormatOptions::new(),
            );

            assert!(changed);
            assert_eq!(
                output,
                format!(
                    "[metadata]\nname = pkg\nversion = 1.0\nlicense_files = {}\n",
                    filename
                )
            );
        }
    }

    #[test]
    fn test_license_directory_ignored() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("licenses")).unwrap();
        fs::write(temp_dir.path().join("LICENSE"), "COPYRIGHT (C) 2019 ME").unwrap();

        let (_, output) = run_format(
            temp_dir.path(),
            "[metadata]\nname = pkg\n",
            FormatOptions::new(),
        );

        assert_eq!(output, "[metadata]\nname = pkg\nlicense_files = LICENSE\n");
    }

    #[test]
    fn test_existing_license_files_kept() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("LICENSE"), "COPYRIGHT (C) 2019 ME").unwrap();
        let input = "[metadata]\nname = pkg\nversion = 1.0\nlicense_files = LICENSE\n";

        let (changed, output) = run_format(temp_dir.path(), input, FormatOptions::new());

        assert!(!changed);
        assert_eq!(output, input);
    }

    #[test]
    fn test_license_file_merged_into_license_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("LICENSE"), "COPYRIGHT (C) 2019 ME").unwrap();
        let input = "[metadata]\nname = pkg\nlicense_file = LICENSES\n";

        let (changed, output) = run_format(temp_dir.path(), input, FormatOptions::new());

        assert!(changed);
        assert_eq!(
            output,
            "[metadata]\nname = pkg\nlicense_files =\n    LICENSE\n    LICENSES\n"
        );
    }

    #[test]
    fn test_mit_license_identified() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("LICENSE"), MIT_LICENSE).unwrap();

        let (changed, output) = run_format(
            temp_dir.path(),
            "[metadata]\nname = pkg\nversion = 1.0\n",
            FormatOptions::new(),
        );

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg
version = 1.0
license = MIT
license_files = LICENSE
classifiers =
    License :: OSI Approved :: MIT License
"
        );
    }

    #[test]
    fn test_license_with_extra_condition_not_identified() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("LICENSE"),
            format!("{}{}", MIT_LICENSE, COMMONS_CLAUSE),
        )
        .unwrap();

        let (changed, output) = run_format(
            temp_dir.path(),
            "[metadata]\nname = pkg\n",
            FormatOptions::new(),
        );

        assert!(changed);
        assert_eq!(output, "[metadata]\nname = pkg\nlicense_files = LICENSE\n");
    }

    #[test]
    fn test_zlib_license_identified() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("LICENSE"), ZLIB_LICENSE).unwrap();

        let (_, output) = run_format(
            temp_dir.path(),
            "[metadata]\nname = pkg\nversion = 1.0\n",
            FormatOptions::new(),
        );

        assert_eq!(
            output,
            "\
[metadata]
name = pkg
version = 1.0
license = Zlib
license_files = LICENSE
classifiers =
    License :: OSI Approved :: zlib/libpng License
"
        );
    }
}

mod python_versions {
    use super::*;

    fn legacy_options() -> FormatOptions {
        FormatOptions::new()
            .with_include_version_classifiers(true)
            .with_min_py_version(v("3.4"))
            .with_max_py_version(v("3.7"))
    }

    #[test]
    fn test_unrecognized_python_requires_left_alone() {
        for requires in ["~=3.6", ">=3"] {
            let temp_dir = create_test_dir();
            fs::write(temp_dir.path().join("tox.ini"), "").unwrap();
            let input = format!(
                "[metadata]\nname = pkg\nversion = 1.0\n\n[options]\npython_requires = {}\n",
                requires
            );

            let (changed, output) = run_format(temp_dir.path(), &input, FormatOptions::new());

            assert!(!changed, "python_requires {}", requires);
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_python_requires_raised_to_minimum() {
        let input = "\
[metadata]
name = pkg

[options]
python_requires = >=3.7
";
        let (changed, output) = rewrite(input);

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg
classifiers =
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3 :: Only

[options]
python_requires = >=3.9
"
        );
    }

    #[test]
    fn test_version_classifiers_removed_by_default() {
        let input = "\
[metadata]
name = pkg
classifiers =
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3 :: Only
    Programming Language :: Python :: 3.10
    Programming Language :: Python :: 3.11

[options]
python_requires = >=3.10
";
        let (changed, output) = rewrite(input);

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg
classifiers =
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3 :: Only

[options]
python_requires = >=3.10
"
        );
    }

    #[test]
    fn test_tox_env_with_factor() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("tox.ini"),
            "[tox]\nenvlist = py37-flake8\n",
        )
        .unwrap();

        let (changed, output) = run_format(
            temp_dir.path(),
            "[metadata]\nname = pkg\nversion = 1.0\n",
            legacy_options(),
        );

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg
version = 1.0
classifiers =
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3 :: Only
    Programming Language :: Python :: 3.7
    Programming Language :: Python :: Implementation :: CPython

[options]
python_requires = >=3.7
"
        );
    }

    #[test]
    fn test_tox_envs_without_minor_ignored() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("tox.ini"),
            "[tox]\nenvlist = py,py2,py3\n",
        )
        .unwrap();
        let input = "\
[metadata]
name = pkg
version = 1.0
classifiers =
    Programming Language :: Python :: Implementation :: CPython
";

        let (changed, output) = run_format(temp_dir.path(), input, legacy_options());

        assert!(!changed);
        assert_eq!(output, input);
    }

    #[test]
    fn test_pypy_env_adds_implementation_classifier() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("tox.ini"),
            "[tox]\nenvlist = py39,pypy3\n",
        )
        .unwrap();

        let (_, output) = run_format(
            temp_dir.path(),
            "[metadata]\nname = pkg\n",
            FormatOptions::new(),
        );

        assert_eq!(
            output,
            "\
[metadata]
name = pkg
classifiers =
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3 :: Only
    Programming Language :: Python :: Implementation :: CPython
    Programming Language :: Python :: Implementation :: PyPy

[options]
python_requires = >=3.9
"
        );
    }

    #[test]
    fn test_minimum_from_classifiers() {
        let input = "\
[metadata]
name = pkg
classifiers =
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3.6
    Programming Language :: Python :: 3.7
";
        let (changed, output) = {
            let temp_dir = create_test_dir();
            run_format(temp_dir.path(), input, legacy_options())
        };

        assert!(changed);
        assert_eq!(
            output,
            "\
[metadata]
name = pkg
classifiers =
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3 :: Only
    Programming Language :: Python :: 3.6
    Programming Language :: Python :: 3.7

[options]
python_requires = >=3.6
"
        );
    }

    #[test]
    fn test_license_classifier_sorted_first() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("LICENSE"), MIT_LICENSE).unwrap();
        let input = "\
[metadata]
name = pkg

[options]
python_requires = >=3.9
";

        let (_, output) = run_format(temp_dir.path(), input, FormatOptions::new());

        assert_eq!(
            output,
            "\
[metadata]
name = pkg
license = MIT
license_files = LICENSE
classifiers =
    License :: OSI Approved :: MIT License
    Programming Language :: Python :: 3
    Programming Language :: Python :: 3 :: Only

[options]
python_requires = >=3.9
"
        );
    }
}

mod orchestration {
    use super::*;

    #[test]
    fn test_multiple_files() {
        let first_dir = create_test_dir();
        let second_dir = create_test_dir();
        let first = write_setup_cfg(first_dir.path(), "[metadata]\nname = pkg\n");
        let second = write_setup_cfg(second_dir.path(), "[metadata]\nname = other-pkg\n");

        let result = Orchestrator::with_formatter(
            vec![first.clone(), second.clone()],
            Formatter::new(FormatOptions::new()),
        )
        .run();

        assert!(result.is_success());
        assert!(result.has_changes());
        assert_eq!(result.reports.len(), 2);
        assert_eq!(result.changed_count(), 1);
        assert_eq!(
            fs::read_to_string(&second).unwrap(),
            "[metadata]\nname = other_pkg\n"
        );
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let temp_dir = create_test_dir();
        let input = "[metadata]\nname = my-pkg\n";
        let path = write_setup_cfg(temp_dir.path(), input);

        let result = Orchestrator::with_formatter(
            vec![path.clone()],
            Formatter::new(FormatOptions::new().with_dry_run(true)),
        )
        .run();

        assert!(result.has_changes());
        assert!(!result.reports[0].written);
        assert_eq!(fs::read_to_string(&path).unwrap(), input);
    }

    #[test]
    fn test_stops_at_first_error() {
        let temp_dir = create_test_dir();
        let bad = temp_dir.path().join("missing.cfg");
        let good_dir = create_test_dir();
        let good = write_setup_cfg(good_dir.path(), "[metadata]\nname = my-pkg\n");

        let result = Orchestrator::with_formatter(
            vec![bad, good.clone()],
            Formatter::new(FormatOptions::new()),
        )
        .run();

        assert!(!result.is_success());
        assert!(result.reports.is_empty());
        assert_eq!(
            fs::read_to_string(&good).unwrap(),
            "[metadata]\nname = my-pkg\n"
        );
    }

    #[test]
    fn test_missing_metadata_is_an_error() {
        let temp_dir = create_test_dir();
        let path = write_setup_cfg(temp_dir.path(), "[options]\npackages = find:\n");

        let err = Formatter::new(FormatOptions::new())
            .format_file(&path)
            .unwrap_err();

        assert!(err.to_string().contains("metadata"));
    }
}
