//! Built-in template bodies.
//!
//! One body per [`TemplateRole`](super::TemplateRole), embedded in the binary
//! so a bare `joist` works with no template directory. Any body can be
//! overridden by a file in `--templates-dir` (see [`super::TemplateSet`]).

/// Comment block rendered into the `header` definition of generated sources.
pub const COMMENT_HEADER: &str = r##"//------------------------------------------------------------------------------
// Copyright (c) {year} {project_name} contributors.
//
// File:        {filename}
// Description: {description}
//------------------------------------------------------------------------------"##;

/// Root `CMakeLists.txt` of a generated project.
pub const ROOT_CMAKE: &str = r##"cmake_minimum_required(VERSION 3.20)

project({projectname}
    DESCRIPTION "{project_description}"
    LANGUAGES CXX)

set(CMAKE_CXX_STANDARD 17)
set(CMAKE_CXX_STANDARD_REQUIRED ON)

list(APPEND CMAKE_MODULE_PATH "${CMAKE_SOURCE_DIR}/cmake")
include(warnings)

enable_testing()

add_subdirectory(code)
"##;

/// Intermediate `CMakeLists.txt` that only aggregates subdirectories.
///
/// `add_subdirectory` lines are appended below this body as applications
/// and libraries are generated.
pub const SUBDIR_CMAKE: &str = r##"# Subdirectory aggregation for {projectname}.
"##;

/// Per-application `CMakeLists.txt`.
pub const APP_CMAKE: &str = r##"project({project_name}
    DESCRIPTION "{project_description}"
    LANGUAGES CXX)

add_executable({project_name}
    src/main.cpp)

target_include_directories({project_name}
    PRIVATE include)

enable_strict_warnings({project_name})
"##;

/// Per-library `CMakeLists.txt`, including the test executable wiring.
pub const LIB_CMAKE: &str = r##"project({project_name}
    DESCRIPTION "{project_description}"
    LANGUAGES CXX)

add_library({project_name} STATIC
    src/{project_name}.cpp)

target_include_directories({project_name}
    PUBLIC include)

enable_strict_warnings({project_name})

add_executable({project_name}_test
    test/{project_name}_test.cpp)

target_link_libraries({project_name}_test
    PRIVATE {project_name} gtest gtest_main)

add_test(NAME {project_name}_test COMMAND {project_name}_test)
"##;

/// Application entry point source.
pub const EXE_MAIN: &str = r##"{header}

#include <iostream>

int main(int argc, char *argv[])
{
    static_cast<void>(argc);
    static_cast<void>(argv);

    std::cout << "{project_name}" << std::endl;
    return 0;
}
"##;

/// Public library header.
pub const LIB_HEADER: &str = r##"{header}

#pragma once

namespace {namespace} {

class {class}
{
public:
    {class}() = default;

    const char *Name() const;
};

} // namespace {namespace}
"##;

/// Library implementation source.
pub const LIB_SOURCE: &str = r##"{header}

#include "{libname}/{libname}.h"

namespace {namespace} {

const char *{class}::Name() const
{
    return "{libname}";
}

} // namespace {namespace}
"##;

/// Unit-test skeleton: a parametrized fixture plus one intentionally failing
/// test case. The failing assertion is the generation smoke test; it is meant
/// to be replaced by real test logic once the project builds.
pub const TEST_SOURCE: &str = r##"{header}

#include "gtest/gtest.h"

#include "{libname}/{libname}.h"

namespace {namespace} {
namespace test {

class {class} : public ::testing::Test
{
public:
    {class}()
    {}
    {class}(const {class} &) = delete;
    {class}({class} &&) = delete;
    {class} operator =(const {class} &) = delete;
    {class} operator =({class} &&) = delete;

    void SetUp() override
    {
    }
    void TearDown() override
    {
    }
};

TEST_F({class}, fails_always)
{
    FAIL();
}

} // namespace test
} // namespace {namespace}
"##;

/// Warning-flag helper written verbatim to `cmake/warnings.cmake`.
///
/// Not a template: it contains no placeholders and is copied as-is.
pub const CMAKE_WARNINGS: &str = r##"# Strict warning flags shared by every generated target.

function(enable_strict_warnings target)
    if(MSVC)
        target_compile_options(${target} PRIVATE /W4)
    else()
        target_compile_options(${target} PRIVATE -Wall -Wextra -Wpedantic)
    endif()
endfunction()
"##;
