#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const TESTING_STANDARDS: &str = r#"# Testing Standards

> **Language**: English | [繁體中文](../locales/zh-TW/core/testing-standards.md)

**Version**: 2.1.0
**Last Updated**: 2026-01-15
**Applicability**: All projects

---

## Purpose

Define how tests are written and maintained.

---

## Testing Pyramid

### Unit Tests

- Fast and isolated
- One behaviour per test
- No network access

### Example Layout

```text
tests/
  unit/
```

## Rules

- MUST cover every public function with a test
- SHOULD keep each test under one second

**CRITICAL**: Never share mutable state between tests.

## Test Types

| Type | Scope | Speed |
|------|-------|-------|
| Unit | Function | Fast |
| Integration | Module | Medium |

## Choosing an Approach

### Option A: Test First

Write tests before code.

### Option B: Test After

Write tests after code.

## Version History

| Version | Date | Changes |
|---------|------|---------|
| 2.1.0 | 2026-01-15 | Added rules |
"#;

pub const CHECKIN_STANDARDS: &str = "# Check-in Standards\n\n## Purpose\n\nWhat to verify before committing.\n\n## Checklist\n\n- MUST run the full test suite\n- MUST NOT commit generated files\n";

pub fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}
