// Go project templates

use chrono::Datelike;

use super::json_string;

/// Go toolchain version declared in `go.mod`
pub const GO_VERSION: &str = "1.21";
/// Structured logging handler pulled in by the generated `main.go`
pub const TINT_MODULE: &str = "github.com/lmittmann/tint";
pub const TINT_VERSION: &str = "v1.1.2";

/// `cmd/<name>/main.go`: colored slog setup and a hello-world entry point.
/// The name only appears inside Go string literals, quoted with `json_string`.
pub fn main_go(project_name: &str) -> String {
    let starting = json_string(&format!("Starting {}", project_name));
    let hello = json_string(&format!("Hello from {}!", project_name));

    format!(
        r#"package main

import (
	"fmt"
	"log/slog"
	"os"

	"{tint}"
)

func init() {{
	// Initialize structured logging with colored output
	slog.SetDefault(slog.New(
		tint.NewHandler(os.Stderr, &tint.Options{{
			Level:      slog.LevelInfo,
			TimeFormat: "15:04:05.0000",
			NoColor:    false,
			AddSource:  false,
		}}),
	))
}}

func main() {{
	slog.Info({starting})
	fmt.Println({hello})
}}
"#,
        tint = TINT_MODULE,
    )
}

/// `cmd/<name>/main_test.go`: a single passing test
pub fn main_test_go(_project_name: &str) -> String {
    r#"package main

import "testing"

func TestMain(t *testing.T) {
	// This test passes - you're ready to go!
	t.Log("Project initialized successfully")
}
"#
    .to_string()
}

/// `go.mod` declaring `module_path`
pub fn go_mod(module_path: &str) -> String {
    format!(
        "module {}\n\ngo {}\n\nrequire {} {}\n",
        module_path, GO_VERSION, TINT_MODULE, TINT_VERSION
    )
}

pub fn readme(project_name: &str, module_path: &str) -> String {
    format!(
        r#"# {name}

Created with proj

Module: `{module}`

## Installation

```bash
go mod tidy
```

## Usage

```bash
go run cmd/{name}/main.go
```

## Testing

```bash
go test ./...
```

## License

MIT
"#,
        name = project_name,
        module = module_path,
    )
}

/// MIT license text for `year`
pub fn license(year: i32) -> String {
    format!(
        r#"MIT License

Copyright (c) {}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#,
        year
    )
}

/// MIT license stamped with the current local year
pub fn license_current_year() -> String {
    license(chrono::Local::now().year())
}

pub fn gitignore() -> String {
    r#"# Binaries
bin/
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary
*.test

# Output
*.out

# Go workspace file
go.work

# IDE
.idea/
.vscode/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db
"#
    .to_string()
}
